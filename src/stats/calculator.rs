//! Statistics Calculator Module
//! Descriptive statistics and the console `describe` table.

/// Row labels of the describe table, in print order.
const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics for a single resistance series.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl DescriptiveStats {
    /// Values in `DESCRIBE_ROWS` order, count included as f64.
    fn row_values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// An empty slice yields count = 0 and NaN everywhere else, so an
    /// all-missing dataset still produces a report instead of a crash.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;

        // Sample standard deviation (n-1), matching pandas describe()
        let std = if n > 1 {
            let variance =
                values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        DescriptiveStats {
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Render a describe() table for the named columns, right-aligned
    /// with six decimal places, in the style of pandas console output.
    pub fn format_describe(columns: &[(&str, &DescriptiveStats)]) -> String {
        let formatted: Vec<Vec<String>> = columns
            .iter()
            .map(|(_, stats)| stats.row_values().iter().map(|v| format!("{v:.6}")).collect())
            .collect();

        let label_width = DESCRIBE_ROWS.iter().map(|r| r.len()).max().unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .zip(&formatted)
            .map(|((name, _), cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
                    .max(name.len())
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(label_width));
        for ((name, _), &width) in columns.iter().zip(&widths) {
            out.push_str(&format!("  {name:>width$}"));
        }
        out.push('\n');

        for (row_idx, label) in DESCRIBE_ROWS.iter().enumerate() {
            out.push_str(&format!("{label:<label_width$}"));
            for (cells, &width) in formatted.iter().zip(&widths) {
                let cell = &cells[row_idx];
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }

        out
    }
}
