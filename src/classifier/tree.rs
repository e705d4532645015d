//! CART decision tree over numeric features
//!
//! Splits are binary threshold tests (`feature <= threshold` goes left)
//! chosen to minimize weighted Gini impurity. Candidate thresholds are the
//! midpoints between consecutive distinct values. Features are scanned in
//! order and thresholds in ascending order; only a strictly better split
//! replaces the current best, so fitting the same data always yields the
//! same tree.

use crate::config::ClassifierSettings;
use crate::error::{KitchenError, KitchenResult};

const IMPURITY_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        counts: Vec<usize>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Class chosen by a leaf plus the share of training rows in that leaf
/// carrying it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafVote {
    pub class: usize,
    pub confidence: f64,
}

/// A fitted classification tree
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Fit a tree to `samples` (one feature row each) labeled with class
    /// indices in `0..n_classes`
    pub fn fit(
        samples: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
        params: ClassifierSettings,
    ) -> KitchenResult<Self> {
        if samples.is_empty() {
            return Err(KitchenError::Model("cannot fit a tree without samples".into()));
        }
        if samples.len() != labels.len() {
            return Err(KitchenError::Model(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }
        if let Some(bad) = labels.iter().find(|&&l| l >= n_classes) {
            return Err(KitchenError::Model(format!("label {} out of range", bad)));
        }

        let n_features = samples[0].len();
        if samples.iter().any(|row| row.len() != n_features) {
            return Err(KitchenError::Model("feature rows differ in length".into()));
        }

        let builder = Builder {
            samples,
            labels,
            n_classes,
            params,
        };
        let indices: Vec<usize> = (0..samples.len()).collect();

        Ok(Self {
            root: builder.build(&indices, 0),
        })
    }

    /// Vote of the leaf `features` falls into
    pub fn predict(&self, features: &[f64]) -> LeafVote {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { counts } => return vote(counts),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature).copied().unwrap_or(f64::NAN);
                    node = if value <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Depth of the deepest leaf (a single leaf has depth 0)
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Split { left, right, .. } => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }
}

struct Builder<'a> {
    samples: &'a [Vec<f64>],
    labels: &'a [usize],
    n_classes: usize,
    params: ClassifierSettings,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl Builder<'_> {
    fn build(&self, indices: &[usize], depth: usize) -> Node {
        let counts = self.class_counts(indices);
        let impurity = gini(&counts, indices.len());

        if depth >= self.params.max_depth
            || indices.len() < self.params.min_samples_split.max(2)
            || impurity <= IMPURITY_EPSILON
        {
            return Node::Leaf { counts };
        }

        match self.best_split(indices) {
            Some(best) if best.impurity < impurity - IMPURITY_EPSILON => {
                let (left, right): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .copied()
                    .partition(|&i| self.samples[i][best.feature] <= best.threshold);

                Node::Split {
                    feature: best.feature,
                    threshold: best.threshold,
                    left: Box::new(self.build(&left, depth + 1)),
                    right: Box::new(self.build(&right, depth + 1)),
                }
            }
            _ => Node::Leaf { counts },
        }
    }

    fn best_split(&self, indices: &[usize]) -> Option<BestSplit> {
        let n_features = self.samples[indices[0]].len();
        let total = indices.len();
        let mut best: Option<BestSplit> = None;

        for feature in 0..n_features {
            let mut sorted: Vec<usize> = indices.to_vec();
            sorted.sort_by(|&a, &b| self.samples[a][feature].total_cmp(&self.samples[b][feature]));

            // Sweep left to right, moving one row at a time into the left child
            let mut left_counts = vec![0usize; self.n_classes];
            let mut right_counts = self.class_counts(indices);

            for pos in 0..total - 1 {
                let row = sorted[pos];
                left_counts[self.labels[row]] += 1;
                right_counts[self.labels[row]] -= 1;

                let here = self.samples[row][feature];
                let next = self.samples[sorted[pos + 1]][feature];
                if here == next {
                    continue;
                }

                let n_left = pos + 1;
                let n_right = total - n_left;
                let weighted = (n_left as f64 * gini(&left_counts, n_left)
                    + n_right as f64 * gini(&right_counts, n_right))
                    / total as f64;

                let better = best.as_ref().map_or(true, |b| weighted < b.impurity);
                if better {
                    best = Some(BestSplit {
                        feature,
                        threshold: (here + next) / 2.0,
                        impurity: weighted,
                    });
                }
            }
        }

        best
    }

    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &i in indices {
            counts[self.labels[i]] += 1;
        }
        counts
    }
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

/// Majority class, lowest index on ties
fn vote(counts: &[usize]) -> LeafVote {
    let total: usize = counts.iter().sum();
    let (class, max) = counts
        .iter()
        .enumerate()
        .fold((0, 0), |(best, best_count), (class, &count)| {
            if count > best_count {
                (class, count)
            } else {
                (best, best_count)
            }
        });

    LeafVote {
        class,
        confidence: if total == 0 { 0.0 } else { max as f64 / total as f64 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ClassifierSettings {
        ClassifierSettings::default()
    }

    #[test]
    fn test_learns_single_threshold() {
        let samples: Vec<Vec<f64>> = (0..10).map(|d| vec![d as f64]).collect();
        let labels: Vec<usize> = (0..10).map(|d| usize::from(d > 4)).collect();

        let tree = DecisionTree::fit(&samples, &labels, 2, params()).unwrap();

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.predict(&[4.0]).class, 0);
        assert_eq!(tree.predict(&[5.0]).class, 1);
        assert_eq!(tree.predict(&[4.5]).class, 0);
        assert_eq!(tree.predict(&[5.0]).confidence, 1.0);
    }

    #[test]
    fn test_respects_max_depth() {
        // Alternating labels need many splits to separate
        let samples: Vec<Vec<f64>> = (0..32).map(|d| vec![d as f64]).collect();
        let labels: Vec<usize> = (0..32).map(|d| d % 2).collect();

        let shallow = ClassifierSettings {
            max_depth: 2,
            min_samples_split: 2,
        };
        let tree = DecisionTree::fit(&samples, &labels, 2, shallow).unwrap();

        assert!(tree.depth() <= 2);
        assert!(tree.leaf_count() <= 4);
    }

    #[test]
    fn test_min_samples_split_stops_growth() {
        let samples = vec![vec![0.0], vec![1.0]];
        let labels = vec![0, 1];

        let tree = DecisionTree::fit(&samples, &labels, 2, params()).unwrap();

        assert_eq!(tree.leaf_count(), 1);
        let vote = tree.predict(&[1.0]);
        assert_eq!(vote.class, 0);
        assert_eq!(vote.confidence, 0.5);
    }

    #[test]
    fn test_uses_second_feature() {
        let samples = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![0, 0, 2, 2, 0, 2];

        let tree = DecisionTree::fit(&samples, &labels, 3, params()).unwrap();

        assert_eq!(tree.predict(&[1.0, 0.0]).class, 0);
        assert_eq!(tree.predict(&[0.0, 1.0]).class, 2);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let samples: Vec<Vec<f64>> = (0..20).map(|d| vec![(d % 3) as f64, d as f64]).collect();
        let labels: Vec<usize> = (0..20).map(|d| (d / 7) as usize).collect();

        let a = DecisionTree::fit(&samples, &labels, 3, params()).unwrap();
        let b = DecisionTree::fit(&samples, &labels, 3, params()).unwrap();

        for row in &samples {
            assert_eq!(a.predict(row), b.predict(row));
        }
        assert_eq!(a.leaf_count(), b.leaf_count());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(DecisionTree::fit(&[], &[], 2, params()).is_err());
        assert!(DecisionTree::fit(&[vec![1.0]], &[5], 2, params()).is_err());
        assert!(DecisionTree::fit(&[vec![1.0]], &[], 2, params()).is_err());
    }
}
