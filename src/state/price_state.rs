//! Price history state and chart series.

use super::ViewMeta;
use crate::api::PriceResponse;

/// A price history laid out for a line chart.
///
/// Labels are array positions, not timestamps: sample `i` is drawn at `x = i`.
/// The series is rebuilt from scratch on every update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    labels: Vec<usize>,
    values: Vec<f64>,
    points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Build a series from samples ordered oldest first.
    pub fn from_history(values: Vec<f64>) -> Self {
        let labels = (0..values.len()).collect();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        Self {
            labels,
            values,
            points,
        }
    }

    /// Positional labels `0..n`.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Samples, unchanged from the server response.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(label, value)` pairs for the chart dataset.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// X-axis bounds. A single point still gets a non-empty range.
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.len().saturating_sub(1).max(1) as f64]
    }

    /// Y-axis bounds over the finite samples, padded when flat.
    pub fn y_bounds(&self) -> Option<[f64; 2]> {
        let (min, max) = self
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;

        if (max - min).abs() < f64::EPSILON {
            Some([min - 1.0, max + 1.0])
        } else {
            Some([min, max])
        }
    }
}

/// Price view state.
#[derive(Debug, Default, Clone)]
pub struct PriceState {
    /// Chart series for the latest history.
    pub series: ChartSeries,
    /// Current market price, when the server reports it.
    pub current: Option<f64>,
    /// Refresh bookkeeping.
    pub meta: ViewMeta,
}

impl PriceState {
    pub(crate) fn replace(&mut self, response: PriceResponse) {
        self.current = response.price.or_else(|| response.history.last().copied());
        self.series = ChartSeries::from_history(response.history);
    }
}
