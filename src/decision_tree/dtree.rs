use std::fmt;
use std::ops::ControlFlow;

use crate::{Domains, Example, Sample, Learner};
use crate::error::Result;
use crate::statistics::{
    class_counts,
    majority,
    most_common_class,
    pertinent_examples,
};

use super::{
    depth::Depth,
    node::Node,
    pruning::split_p_value,
    split_by::SplitBy,
    classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm for categorical attributes.
/// Given a set of training examples,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// Each branch node splits on one attribute and has one child
/// for every value in the domain of the attribute.
/// An attribute is used at most once on a path from the root.
///
/// If a significance threshold `q` is given,
/// every split is tested by the chi-squared test
/// (see [`pruning`](super::pruning)) and
/// replaced by a leaf if its p-value exceeds `q`.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .split_by(SplitBy::Entropy)
///     .prune(0.05)
///     .build();
///
/// let f = tree.produce(&sample).unwrap();
/// let loss = f.error_rate(&sample).unwrap();
/// println!("loss (train) is: {loss}");
/// ```
pub struct DecisionTree<'a> {
    domains:      &'a Domains,
    class:        &'a str,
    attributes:   Vec<&'a str>,
    split_by:     SplitBy,
    significance: Option<f64>,
    max_depth:    Depth,
}


impl<'a> DecisionTree<'a> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        sample:       &'a Sample,
        split_by:     SplitBy,
        significance: Option<f64>,
        max_depth:    Depth,
    ) -> Self
    {
        let domains = sample.domains();
        let class = sample.class();
        let attributes = sample.attributes();
        Self { domains, class, attributes, split_by, significance, max_depth, }
    }


    /// Grow a tree on `examples` without pruning.
    ///
    /// `remaining` lists the attributes not used on the path so far,
    /// in the order they are examined.
    /// `default` is the label of the leaf for an empty subset.
    pub fn build_subtree(
        &self,
        remaining: &[&'a str],
        examples:  &[&Example],
        default:   &str,
        depth:     Depth,
    ) -> Node
    {
        let majority = match self.base_case(remaining, examples, default, depth) {
            ControlFlow::Break(leaf) => { return leaf; },
            ControlFlow::Continue(majority) => majority,
        };

        let Some(attribute) = self.best_attribute(remaining, examples) else {
            return Node::leaf(majority);
        };

        let (remaining, blocks) = self.partition(attribute, remaining, examples);
        let children = blocks.into_iter()
            .map(|(value, subset)| {
                let child = self.build_subtree(
                    &remaining, &subset, majority, depth - 1
                );
                (value.to_string(), child)
            })
            .collect::<Vec<_>>();

        Node::branch(attribute, children)
    }


    /// Grow a tree on `examples` with the chi-squared pruning.
    /// A split whose p-value is greater than `q` is replaced by
    /// a leaf of the most common class.
    ///
    /// The arguments are the same as [`DecisionTree::build_subtree`].
    pub fn build_pruned_subtree(
        &self,
        remaining: &[&'a str],
        examples:  &[&Example],
        default:   &str,
        q:         f64,
        depth:     Depth,
    ) -> Result<Node>
    {
        let majority = match self.base_case(remaining, examples, default, depth) {
            ControlFlow::Break(leaf) => { return Ok(leaf); },
            ControlFlow::Continue(majority) => majority,
        };

        let Some(attribute) = self.best_attribute(remaining, examples) else {
            return Ok(Node::leaf(majority));
        };

        let values = self.domains.values(attribute).unwrap_or_default();
        let p_value = split_p_value(examples, attribute, values, self.class)?;
        if p_value > q {
            return Ok(Node::leaf(majority));
        }

        let (remaining, blocks) = self.partition(attribute, remaining, examples);
        let children = blocks.into_iter()
            .map(|(value, subset)| {
                let child = self.build_pruned_subtree(
                    &remaining, &subset, majority, q, depth - 1
                )?;
                Ok((value.to_string(), child))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::branch(attribute, children))
    }


    /// Checks the base cases in order:
    /// 1. an empty subset gets the `default` label,
    /// 2. a subset of a single class gets that class,
    /// 3. no remaining attribute (or no remaining depth)
    ///    gets the most common class.
    ///
    /// Otherwise returns the most common class of the subset,
    /// which becomes the default label of the children.
    fn base_case<'e>(
        &self,
        remaining: &[&str],
        examples:  &[&'e Example],
        default:   &str,
        depth:     Depth,
    ) -> ControlFlow<Node, &'e str>
    {
        if examples.is_empty() {
            return ControlFlow::Break(Node::leaf(default));
        }

        let counts = class_counts(examples, self.class);
        let Some(label) = majority(&counts) else {
            return ControlFlow::Break(Node::leaf(default));
        };

        if counts.len() == 1 || remaining.is_empty() || depth < 1 {
            return ControlFlow::Break(Node::leaf(label));
        }

        ControlFlow::Continue(label)
    }


    #[inline]
    fn best_attribute(&self, remaining: &[&'a str], examples: &[&Example])
        -> Option<&'a str>
    {
        self.split_by.best_attribute(
            remaining, examples, self.domains, self.class
        )
    }


    /// Returns the attributes left after splitting on `attribute`
    /// and the subset of `examples` for each value of `attribute`.
    #[allow(clippy::type_complexity)]
    fn partition<'e>(
        &self,
        attribute: &str,
        remaining: &[&'a str],
        examples:  &[&'e Example],
    ) -> (Vec<&'a str>, Vec<(&'a str, Vec<&'e Example>)>)
    {
        let remaining = remaining.iter()
            .copied()
            .filter(|name| *name != attribute)
            .collect::<Vec<_>>();

        let blocks = self.domains.values(attribute)
            .unwrap_or_default()
            .iter()
            .map(|value| {
                let subset = pertinent_examples(examples, attribute, value);
                (value.as_str(), subset)
            })
            .collect::<Vec<_>>();

        (remaining, blocks)
    }
}


impl Learner for DecisionTree<'_> {
    type Hypothesis = DecisionTreeClassifier;

    fn name(&self) -> &str {
        match self.significance {
            Some(_) => "Pruned Decision Tree",
            None => "Decision Tree",
        }
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        let pruning = match self.significance {
            Some(q) => format!("Chi-squared (q = {q})"),
            None => "Nothing".to_string(),
        };
        let info = Vec::from([
            ("# of attributes", format!("{}", self.attributes.len())),
            ("Max depth", format!("{}", self.max_depth)),
            ("Split by", format!("{}", self.split_by)),
            ("Pruning", pruning),
        ]);
        Some(info)
    }

    /// Grow a tree on all the examples of `sample`.
    /// The default label of the root is
    /// the most common class of `sample`.
    ///
    /// Fails if `sample` does not pass [`Sample::validate`].
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        sample.validate()?;

        let examples = sample.examples()
            .iter()
            .collect::<Vec<_>>();
        let default = most_common_class(&examples, self.class)
            .unwrap_or_default();

        let root = match self.significance {
            Some(q) => self.build_pruned_subtree(
                &self.attributes, &examples, default, q, self.max_depth
            )?,
            None => self.build_subtree(
                &self.attributes, &examples, default, self.max_depth
            ),
        };

        Ok(DecisionTreeClassifier::from(root))
    }
}


impl fmt::Display for DecisionTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            - Split by: {}\n\
            - Class: {}\n\
            - Attributes:\
            ",
            self.max_depth,
            self.split_by,
            self.class,
        )?;

        for name in self.attributes.iter() {
            let n_values = self.domains.values(name)
                .map_or(0, <[String]>::len);
            writeln!(f, "\t* [{name} | {n_values} values]")?;
        }

        if let Some(q) = self.significance {
            writeln!(f, "- Pruning: chi-squared, q = {q}")?;
        }

        write!(f, "----------")
    }
}
