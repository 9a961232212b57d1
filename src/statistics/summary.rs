//! Named metric summaries for presentation.

use serde::{Deserialize, Serialize};

/// One named metric. `None` marks an undefined value, rendered as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Display name.
    pub name: String,
    /// Value after presentation rounding.
    pub value: Option<f64>,
}

/// Ordered list of named metrics produced by a statistics type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    metrics: Vec<Metric>,
}

impl StatSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a metric, builder style.
    pub fn with(mut self, name: &str, value: impl Into<Option<f64>>) -> Self {
        self.metrics.push(Metric {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Looks up a metric value by name.
    ///
    /// Returns `None` both for unknown names and for undefined values.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .and_then(|m| m.value)
    }

    /// Iterates over the metrics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    /// Returns the number of metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Returns true if the summary has no metrics.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl std::fmt::Display for StatSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for metric in &self.metrics {
            match metric.value {
                Some(value) => writeln!(f, "{}: {}", metric.name, value)?,
                None => writeln!(f, "{}: N/A", metric.name)?,
            }
        }
        Ok(())
    }
}
