//! TF-IDF weighting for `|`-delimited categorical fields.
//!
//! Each field (genres, keywords, cast) gets its own [`TfidfVectorizer`]:
//! vocabularies and IDF weights are fit per field and never shared, so the
//! three blocks of the feature matrix are disjoint.
//!
//! ## Algorithm
//! 1. Lowercase the document and split on `|`; every entry is one token,
//!    spaces included. Stop words are dropped. An empty entry (a missing
//!    field, or a trailing `|`) stays as the token `""`.
//! 2. Vocabulary = every remaining token, sorted, one column each.
//! 3. `idf(t) = ln((1 + n) / (1 + df(t))) + 1` (smoothed)
//! 4. Row value = raw count * idf, then the row is scaled to unit L2 norm.

use crate::stop_words::is_stop_word;
use data_loader::FIELD_DELIMITER;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Split one field value into lowercase tokens.
///
/// Example: "Science Fiction|Action|The" -> ["science fiction", "action"]
///          "" -> [""]
pub fn tokenize(document: &str) -> Vec<String> {
    document
        .to_lowercase()
        .split(FIELD_DELIMITER)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Vocabulary and IDF weights fitted on one field of the catalog.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    /// token -> column index (columns are in sorted token order)
    vocabulary: HashMap<String, usize>,
    /// IDF weight per column
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit on a corpus and return the weighted rows for that same corpus.
    pub fn fit_transform(documents: &[&str]) -> (Self, Vec<Vec<f64>>) {
        let tokenized: Vec<Vec<String>> = documents.par_iter().map(|d| tokenize(d)).collect();
        let vectorizer = Self::fit_tokens(&tokenized);
        let rows = tokenized
            .par_iter()
            .map(|tokens| vectorizer.weigh(tokens))
            .collect();
        (vectorizer, rows)
    }

    /// Number of columns this vectorizer produces
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    fn fit_tokens(tokenized: &[Vec<String>]) -> Self {
        let n = tokenized.len() as f64;

        // BTreeSet gives a sorted, deterministic column order
        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t.as_str()]).collect();
            for column in unique {
                doc_freq[column] += 1;
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut row = vec![0.0; self.idf.len()];
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                row[column] += 1.0;
            }
        }
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        normalize(&mut row);
        row
    }
}

/// Scale to unit length in place; an all-zero row is left alone
fn normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l2(row: &[f64]) -> f64 {
        row.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    fn feature_names(vectorizer: &TfidfVectorizer) -> Vec<&str> {
        let mut names: Vec<(&str, usize)> = vectorizer
            .vocabulary
            .iter()
            .map(|(token, &column)| (token.as_str(), column))
            .collect();
        names.sort_by_key(|&(_, column)| column);
        names.into_iter().map(|(token, _)| token).collect()
    }

    fn idf(vectorizer: &TfidfVectorizer, token: &str) -> Option<f64> {
        vectorizer.vocabulary.get(token).map(|&column| vectorizer.idf[column])
    }

    #[test]
    fn test_tokenize_keeps_spaces_inside_entries() {
        assert_eq!(
            tokenize("Science Fiction|Action"),
            vec!["science fiction".to_string(), "action".to_string()]
        );
    }

    #[test]
    fn test_tokenize_drops_stop_words_keeps_empty_entries() {
        assert_eq!(
            tokenize("The|Drama||"),
            vec!["drama".to_string(), String::new(), String::new()]
        );
        assert_eq!(tokenize(""), vec![String::new()]);
        assert!(tokenize("the|of").is_empty());
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let (vectorizer, _) = TfidfVectorizer::fit_transform(&["Drama|Action", "Comedy"]);
        assert_eq!(feature_names(&vectorizer), vec!["action", "comedy", "drama"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let (vectorizer, _) =
            TfidfVectorizer::fit_transform(&["Action|Adventure", "Action|Sci-Fi", "Crime"]);

        // n = 3, df(action) = 2 -> ln(4/3) + 1
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((idf(&vectorizer, "action").unwrap() - expected).abs() < 1e-12);
        // df(crime) = 1 -> ln(4/2) + 1
        let expected = 2.0f64.ln() + 1.0;
        assert!((idf(&vectorizer, "crime").unwrap() - expected).abs() < 1e-12);
        assert!(idf(&vectorizer, "drama").is_none());
    }

    #[test]
    fn test_empty_entry_is_a_term() {
        let (vectorizer, rows) = TfidfVectorizer::fit_transform(&["Drama|", "", "Comedy"]);

        // "" sorts first
        assert_eq!(feature_names(&vectorizer), vec!["", "comedy", "drama"]);
        // df("") = 2 -> ln(4/3) + 1
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((idf(&vectorizer, "").unwrap() - expected).abs() < 1e-12);
        // The two documents with an empty entry share that column
        assert!(rows[0][0] > 0.0);
        assert!((rows[1][0] - 1.0).abs() < 1e-12);
        assert_eq!(&rows[1][1..], &[0.0, 0.0]);
        assert_eq!(rows[2][0], 0.0);
    }

    #[test]
    fn test_rows_are_unit_length_or_zero() {
        let (_, rows) = TfidfVectorizer::fit_transform(&["Action|Adventure", "", "the"]);

        assert!((l2(&rows[0]) - 1.0).abs() < 1e-12);
        assert!((l2(&rows[1]) - 1.0).abs() < 1e-12);
        assert_eq!(l2(&rows[2]), 0.0);
    }

    #[test]
    fn test_rarer_token_weighs_more() {
        let (vectorizer, rows) =
            TfidfVectorizer::fit_transform(&["Action|Adventure", "Action|Sci-Fi", "Crime"]);
        let names = feature_names(&vectorizer);
        let action = names.iter().position(|&n| n == "action").unwrap();
        let adventure = names.iter().position(|&n| n == "adventure").unwrap();

        assert!(rows[0][adventure] > rows[0][action]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let (vectorizer, rows) = TfidfVectorizer::fit_transform(&["the", "of|a"]);

        assert_eq!(vectorizer.vocabulary_len(), 0);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.is_empty()));
    }
}
