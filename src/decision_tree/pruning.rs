//! Chi-squared significance test used to prune a split.
//!
//! The null hypothesis is that the split attribute is
//! independent of the class.
//! Under the null hypothesis, the block of value `v` is expected to hold
//! ```txt
//! expected(v, c) = count(c) / N * |block(v)|
//! ```
//! examples of class `c`.
//! The deviance
//! ```txt
//! D = Σ_{v, c} (observed(v, c) - expected(v, c))^2 / expected(v, c)
//! ```
//! follows the chi-squared distribution
//! with `|values| - 1` degrees of freedom.
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::Example;
use crate::error::{Result, TreeError};
use crate::statistics::{
    AttributeCounts,
    ClassCounts,
    attribute_counts,
    class_counts,
};


/// Returns the chi-squared deviance of the cross table `counts`
/// from the table expected under independence.
/// `totals` is the class histogram of the whole subset.
/// Cells whose expected count is `0` are skipped.
pub fn deviance(counts: &AttributeCounts<'_>, totals: &ClassCounts<'_>)
    -> f64
{
    let n_examples = totals.values().sum::<usize>();
    if n_examples == 0 { return 0f64; }
    let n_examples = n_examples as f64;

    counts.iter()
        .map(|(_, block)| {
            let size = block.values().sum::<usize>() as f64;
            totals.iter()
                .map(|(class, &total)| {
                    let expected = total as f64 / n_examples * size;
                    if expected <= 0f64 { return 0f64; }

                    let observed = block.get(class).copied()
                        .unwrap_or(0) as f64;
                    (observed - expected).powi(2) / expected
                })
                .sum::<f64>()
        })
        .sum::<f64>()
}


/// Returns the right-tail probability `P[X > statistic]`
/// of the chi-squared distribution
/// with `degrees_of_freedom` degrees of freedom.
///
/// The test is undefined for zero degrees of freedom.
/// In that case this function returns `0`,
/// so that a split on a single-valued attribute is never rejected.
pub fn chi_squared_survival(statistic: f64, degrees_of_freedom: usize)
    -> Result<f64>
{
    if degrees_of_freedom == 0 { return Ok(0f64); }

    let dist = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| TreeError::ChiSquared(e.to_string()))?;
    Ok(dist.sf(statistic))
}


/// Returns the p-value of the split of `examples` on `attribute`.
/// A large p-value means that the split is not significant.
pub fn split_p_value(
    examples: &[&Example],
    attribute: &str,
    values: &[String],
    class: &str,
) -> Result<f64>
{
    let counts = attribute_counts(examples, attribute, values, class);
    let totals = class_counts(examples, class);

    let dev = deviance(&counts, &totals);
    let dof = values.len().saturating_sub(1);

    chi_squared_survival(dev, dof)
}
