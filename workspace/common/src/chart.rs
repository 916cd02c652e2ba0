//! Sliding window of samples feeding the temperature chart.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of samples kept on screen.
pub const CHART_CAPACITY: usize = 20;

/// One plotted point: a formatted time label and the reading, `None`
/// when the station skipped the field (charts as a gap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    pub label: String,
    pub value: Option<f64>,
}

/// Fixed-capacity buffer with FIFO eviction: once full, every push
/// drops the oldest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBuffer {
    samples: VecDeque<ChartSample>,
    capacity: usize,
}

impl Default for ChartBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBuffer {
    pub fn new() -> Self {
        Self::with_capacity(CHART_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest beyond capacity.
    pub fn push(&mut self, sample: ChartSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time labels, oldest first.
    pub fn labels(&self) -> Vec<String> {
        self.samples.iter().map(|s| s.label.clone()).collect()
    }

    /// Values in the same order as [`labels`](Self::labels).
    pub fn values(&self) -> Vec<Option<f64>> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartSample> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> ChartSample {
        ChartSample {
            label: format!("t{}", n),
            value: Some(n as f64),
        }
    }

    #[test]
    fn test_push_keeps_arrival_order() {
        let mut buffer = ChartBuffer::new();
        for n in 0..5 {
            buffer.push(sample(n));
        }
        assert_eq!(buffer.labels(), vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn test_25_pushes_leave_last_20_in_order() {
        let mut buffer = ChartBuffer::new();
        for n in 0..25 {
            buffer.push(sample(n));
        }
        assert_eq!(buffer.len(), CHART_CAPACITY);
        let expected: Vec<String> = (5..25).map(|n| format!("t{}", n)).collect();
        assert_eq!(buffer.labels(), expected);
        assert_eq!(buffer.values()[0], Some(5.0));
        assert_eq!(buffer.values()[19], Some(24.0));
    }

    #[test]
    fn test_missing_values_are_preserved_as_gaps() {
        let mut buffer = ChartBuffer::new();
        buffer.push(ChartSample {
            label: "t0".to_string(),
            value: None,
        });
        buffer.push(sample(1));
        assert_eq!(buffer.values(), vec![None, Some(1.0)]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut buffer = ChartBuffer::with_capacity(2);
        for n in 0..3 {
            buffer.push(sample(n));
        }
        assert_eq!(buffer.labels(), vec!["t1", "t2"]);
    }
}
