//! Cosine similarity and top-k ranking over the feature matrix.

use crate::features::FeatureMatrix;
use rayon::prelude::*;
use std::cmp::Ordering;

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn l2_norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// `dot(a, b) / (|a| * |b|)`, or 0.0 when either vector is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    cosine_from_parts(dot(a, b), l2_norm(a), l2_norm(b))
}

fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    let denominator = norm_a * norm_b;
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

/// Similarity of row `query` against every row, itself included.
///
/// Uses the norms cached in the matrix.
pub fn score_all(matrix: &FeatureMatrix, query: usize) -> Vec<f64> {
    let query_row = matrix.row(query);
    let query_norm = matrix.norm(query);

    (0..matrix.rows())
        .into_par_iter()
        .map(|index| {
            cosine_from_parts(dot(query_row, matrix.row(index)), query_norm, matrix.norm(index))
        })
        .collect()
}

/// Indices ordered by descending score, `exclude` removed, first `k` kept.
///
/// Equal scores keep their original row order.
pub fn rank(scores: &[f64], exclude: usize, k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    // Vec::sort_by is stable
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .filter(|&(index, _)| index != exclude)
        .take(k)
        .collect()
}
