//! Min-max scaling of the continuous feature columns.

/// Per-column minimum and maximum observed during [`fit`](Self::fit).
///
/// `scaled = (x - min) / (max - min)`, and a column with `max == min`
/// scales to all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler<const N: usize> {
    min: [f64; N],
    max: [f64; N],
}

impl<const N: usize> MinMaxScaler<N> {
    /// Record each column's range. An empty input gives a scaler that maps
    /// everything to zero.
    pub fn fit(rows: &[[f64; N]]) -> Self {
        let mut min = [f64::INFINITY; N];
        let mut max = [f64::NEG_INFINITY; N];
        for row in rows {
            for column in 0..N {
                min[column] = min[column].min(row[column]);
                max[column] = max[column].max(row[column]);
            }
        }
        if rows.is_empty() {
            min = [0.0; N];
            max = [0.0; N];
        }
        Self { min, max }
    }

    pub fn transform(&self, row: &[f64; N]) -> [f64; N] {
        let mut scaled = [0.0; N];
        for column in 0..N {
            let range = self.max[column] - self.min[column];
            if range > 0.0 {
                scaled[column] = (row[column] - self.min[column]) / range;
            }
        }
        scaled
    }

    pub fn fit_transform(rows: &[[f64; N]]) -> Vec<[f64; N]> {
        let scaler = Self::fit(rows);
        rows.iter().map(|row| scaler.transform(row)).collect()
    }
}
