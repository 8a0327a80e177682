//! Regression tree in parallel-array form.
//!
//! Node `i` is described by `children_left[i]`, `children_right[i]`,
//! `feature[i]`, `threshold[i]` and `value[i]`. A node whose left child is
//! [`LEAF`] is a leaf and predicts `value[i]`; an internal node sends a
//! sample left when `x[feature] <= threshold`.

use aqi_core::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// Child index marking a leaf.
pub const LEAF: i64 = -1;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.value.len()
    }

    /// Check the arrays describe a well-formed tree.
    ///
    /// Children must come after their parent, so every walk from the root
    /// strictly increases the node index and terminates.
    pub fn validate(&self) -> anyhow::Result<()> {
        let n = self.node_count();
        if n == 0 {
            anyhow::bail!("tree has no nodes");
        }
        if self.children_left.len() != n
            || self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
        {
            anyhow::bail!("tree arrays have mismatched lengths");
        }
        for i in 0..n {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == LEAF {
                if right != LEAF {
                    anyhow::bail!("node {} has a right child but no left child", i);
                }
                continue;
            }
            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    anyhow::bail!("node {} has out-of-order child {}", i, child);
                }
            }
            let feature = self.feature[i];
            if feature < 0 || feature >= FEATURE_COUNT as i64 {
                anyhow::bail!("node {} splits on unknown feature {}", i, feature);
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf. Assumes [`validate`](Self::validate) passed.
    pub fn predict(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}
