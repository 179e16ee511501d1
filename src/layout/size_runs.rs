//! Run-length encoding of item sizes for compact layout descriptions.

use serde::{Deserialize, Serialize};

/// `count` consecutive items of the same `size`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRun {
    pub count: usize,
    pub size: f64,
}

/// Lossless run-length form of a size sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeRuns(Vec<SizeRun>);

impl SizeRuns {
    /// Collapse consecutive equal sizes into runs.
    #[allow(clippy::float_cmp)]
    pub fn compress(sizes: &[f64]) -> Self {
        let mut runs: Vec<SizeRun> = Vec::new();
        for &size in sizes {
            match runs.last_mut() {
                Some(run) if run.size == size => run.count += 1,
                _ => runs.push(SizeRun { count: 1, size }),
            }
        }
        Self(runs)
    }

    /// Reproduce the original size sequence.
    pub fn expand(&self) -> Vec<f64> {
        self.0
            .iter()
            .flat_map(|run| std::iter::repeat(run.size).take(run.count))
            .collect()
    }

    /// The runs, in order.
    pub fn runs(&self) -> &[SizeRun] {
        &self.0
    }

    /// True if there are no runs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of items described.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(|run| run.count).sum()
    }

    /// CSS grid track list, e.g. `repeat(3,30px) 45px`.
    ///
    /// `None` when there are no items.
    pub fn to_grid_template(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let tracks: Vec<String> = self
            .0
            .iter()
            .map(|run| {
                if run.count == 1 {
                    format!("{}px", run.size)
                } else {
                    format!("repeat({},{}px)", run.count, run.size)
                }
            })
            .collect();
        Some(tracks.join(" "))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_mixed() {
        let runs = SizeRuns::compress(&[30.0, 30.0, 30.0, 45.0, 30.0]);
        assert_eq!(
            runs.runs(),
            &[
                SizeRun {
                    count: 3,
                    size: 30.0
                },
                SizeRun {
                    count: 1,
                    size: 45.0
                },
                SizeRun {
                    count: 1,
                    size: 30.0
                },
            ]
        );
        assert_eq!(runs.item_count(), 5);
    }

    #[test]
    fn test_expand_restores_sequence() {
        for sizes in [
            vec![],
            vec![20.0; 17],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 5.0, 0.0, 0.0, 7.5, 5.0],
        ] {
            assert_eq!(SizeRuns::compress(&sizes).expand(), sizes);
        }
    }

    #[test]
    fn test_grid_template() {
        assert_eq!(SizeRuns::compress(&[]).to_grid_template(), None);
        assert_eq!(
            SizeRuns::compress(&[30.0]).to_grid_template().unwrap(),
            "30px"
        );
        assert_eq!(
            SizeRuns::compress(&[30.0, 30.0, 12.5]).to_grid_template().unwrap(),
            "repeat(2,30px) 12.5px"
        );
    }
}
