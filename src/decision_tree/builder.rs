use crate::Sample;
use crate::checkers;
use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_SPLIT_BY};

use super::{
    depth::Depth,
    dtree::DecisionTree,
    split_by::SplitBy,
};


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// # let sample = SampleReader::default()
/// #     .file("/path/to/data/file.csv")
/// #     .has_header(true)
/// #     .target_feature("class")
/// #     .read()
/// #     .unwrap();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .split_by(SplitBy::Gini)
///     .prune(0.05)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    split_by: SplitBy,
    significance: Option<f64>,
    max_depth: Depth,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// split_by: DEFAULT_SPLIT_BY == SplitBy::Entropy,
    /// pruning: None,
    /// max_depth: DEFAULT_MAX_DEPTH == 256,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        let split_by = DEFAULT_SPLIT_BY;
        let significance = None;
        let max_depth = Depth::from(DEFAULT_MAX_DEPTH);

        Self { sample, split_by, significance, max_depth, }
    }


    /// Set the node splitting rule.
    /// Default value is `SplitBy::Entropy`.
    /// See [`SplitBy`] for other rules.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }


    /// Enable the chi-squared pruning with significance threshold `q`.
    /// A split is rejected if its p-value is greater than `q`,
    /// so a larger `q` prunes more.
    /// `q` must be in `[0, 1]`.
    pub fn prune(mut self, q: f64) -> Self {
        checkers::significance(q);
        self.significance = Some(q);
        self
    }


    /// Specify the maximal depth of the tree.
    /// Default maximal depth is `256`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        checkers::max_depth(depth);
        self.max_depth = Depth::from(depth);
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::new(
            self.sample, self.split_by, self.significance, self.max_depth
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Example, Learner};

    fn sample() -> Sample {
        let examples = vec![
            Example::from([("a", "x"), ("y", "yes")]),
            Example::from([("a", "z"), ("y", "no")]),
        ];
        Sample::from_examples(examples, &["a", "y"], "y")
    }

    #[test]
    fn test_build_01() {
        let sample = sample();
        let tree = DecisionTreeBuilder::new(&sample).build();
        assert_eq!(tree.name(), "Decision Tree");

        let tree = DecisionTreeBuilder::new(&sample)
            .prune(0.5)
            .build();
        assert_eq!(tree.name(), "Pruned Decision Tree");
    }

    #[test]
    #[should_panic]
    fn test_prune_01() {
        let sample = sample();
        let _ = DecisionTreeBuilder::new(&sample).prune(1.5);
    }

    #[test]
    #[should_panic]
    fn test_max_depth_01() {
        let sample = sample();
        let _ = DecisionTreeBuilder::new(&sample).max_depth(0);
    }
}
