//! Gain functions that score the split on a categorical attribute.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;

use crate::{Example, Domains};
use crate::impurity::{set_entropy, gini_index};
use crate::statistics::{class_counts, pertinent_examples};


/// Score for a splitting.
/// This is just a wrapper for `f64`.
/// The larger score is the better split.
#[repr(transparent)]
#[derive(Copy, Clone, Debug)]
pub(crate) struct Score(pub(crate) f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


/// Splitting criteria for growing decision tree.
/// * `SplitBy::Entropy` maximizes the information gain.
/// * `SplitBy::Gini` maximizes the inverse of
///     the weighted gini index of the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitBy {
    /// Information gain.
    Entropy,
    /// Gini gain.
    Gini,
}


impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy (Information gain)",
            Self::Gini => "Gini index (Gini gain)",
        };

        write!(f, "{name}")
    }
}


impl SplitBy {
    /// Returns the gain of splitting `examples` on `attribute`.
    /// `examples` must hold at least one class value.
    #[inline]
    pub fn gain(
        &self,
        examples: &[&Example],
        attribute: &str,
        values: &[String],
        class: &str,
    ) -> f64
    {
        match self {
            Self::Entropy => information_gain(examples, attribute, values, class),
            Self::Gini => gini_gain(examples, attribute, values, class),
        }
    }


    /// Returns the attribute in `remaining` that maximizes the gain.
    /// Ties are broken in favor of the earliest attribute in `remaining`.
    /// Returns `None` if `remaining` is empty.
    pub(crate) fn best_attribute<'r>(
        &self,
        remaining: &[&'r str],
        examples: &[&Example],
        domains: &Domains,
        class: &str,
    ) -> Option<&'r str>
    {
        let mut best: Option<(&'r str, Score)> = None;
        for &attribute in remaining {
            let values = domains.values(attribute).unwrap_or_default();
            let score = Score::from(
                self.gain(examples, attribute, values, class)
            );

            match best {
                Some((_, best_score)) if !(score > best_score) => {},
                _ => { best = Some((attribute, score)); },
            }
        }
        best.map(|(attribute, _)| attribute)
    }
}


/// Returns the weighted entropy of the partition of `examples`
/// induced by `attribute`.
/// Each block is weighted by its share of the class values.
/// Empty blocks contribute `0`.
pub fn remainder(
    examples: &[&Example],
    attribute: &str,
    values: &[String],
    class: &str,
) -> f64
{
    let total = class_counts(examples, class).values().sum::<usize>();
    if total == 0 { return 0f64; }
    let total = total as f64;

    values.iter()
        .map(|value| {
            let subset = pertinent_examples(examples, attribute, value);
            let counts = class_counts(&subset, class);
            let size = counts.values().sum::<usize>();
            if size == 0 { return 0f64; }

            size as f64 / total * set_entropy(counts.values().copied())
        })
        .sum::<f64>()
}


/// Returns the information gain of splitting `examples` on `attribute`,
/// i.e., the entropy of `examples` minus the [`remainder`].
///
/// # Panics
/// Panics if `examples` holds no class value.
pub fn information_gain(
    examples: &[&Example],
    attribute: &str,
    values: &[String],
    class: &str,
) -> f64
{
    let counts = class_counts(examples, class);
    set_entropy(counts.values().copied())
        - remainder(examples, attribute, values, class)
}


/// Returns the inverse of the weighted gini index
/// of the partition of `examples` induced by `attribute`.
/// Each block is weighted by its share of the examples.
///
/// If the weighted gini index is `0`,
/// i.e., every block is pure, this function returns `f64::MAX`.
pub fn gini_gain(
    examples: &[&Example],
    attribute: &str,
    values: &[String],
    class: &str,
) -> f64
{
    let total = examples.len() as f64;

    let weighted = values.iter()
        .map(|value| {
            let subset = pertinent_examples(examples, attribute, value);
            let counts = class_counts(&subset, class);
            if counts.is_empty() { return 0f64; }

            subset.len() as f64 / total * gini_index(counts.values().copied())
        })
        .sum::<f64>();

    if weighted == 0f64 { f64::MAX } else { 1f64 / weighted }
}
