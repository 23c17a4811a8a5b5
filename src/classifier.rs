//! A trait that defines the behavior of a categorical classifier.
use rayon::prelude::*;

use crate::{Example, Sample};
use crate::error::Result;


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts the class value of `example`.
    fn classify(&self, example: &Example) -> Result<&str>;


    /// Predicts the class values of all examples in `sample`.
    /// Fails on the first example that does not agree with
    /// the attribute domains of the classifier.
    fn classify_all(&self, sample: &Sample) -> Result<Vec<&str>>
        where Self: Sync
    {
        sample.examples()
            .par_iter()
            .map(|example| self.classify(example))
            .collect()
    }


    /// Returns the fraction of examples in `sample`
    /// whose prediction differs from their class value.
    /// Returns `0` for an empty sample.
    fn error_rate(&self, sample: &Sample) -> Result<f64>
        where Self: Sync
    {
        let n_sample = sample.examples().len();
        if n_sample == 0 { return Ok(0f64); }

        let predictions = self.classify_all(sample)?;
        let n_errors = predictions.into_iter()
            .zip(sample.target())
            .filter(|(p, y)| Some(*p) != *y)
            .count();
        Ok(n_errors as f64 / n_sample as f64)
    }
}
