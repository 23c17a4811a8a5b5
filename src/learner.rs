//! The core trait for the tree learners.
//!
//! Given a training sample,
//! a learner returns a hypothesis (a classifier).
use crate::Sample;
use crate::error::Result;


/// An interface for the learners.
pub trait Learner {
    /// Returned hypothesis generated by `self`.
    type Hypothesis;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the information of the learner in `(key, value)` form.
    /// `Logger` prints these pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains on `sample` and returns a hypothesis.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
