//! Impurity measures over a histogram of class counts.
//!
//! Both measures require a positive total count;
//! calling them with an empty histogram is a bug of the caller
//! and panics.
use crate::checkers;


/// Returns the entropy (in bits) of the given class counts:
/// ```txt
/// H = - Σ (c[i] / N) log2 (c[i] / N),  N = Σ c[i].
/// ```
/// Zero counts contribute `0`.
///
/// # Panics
/// Panics if the total count is zero.
#[inline]
pub fn set_entropy<I>(counts: I) -> f64
    where I: IntoIterator<Item = usize>,
          I::IntoIter: Clone,
{
    let counts = counts.into_iter();
    let total = counts.clone().sum::<usize>();
    checkers::non_empty_counts(total);

    let total = total as f64;
    counts.filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / total;
            - p * p.log2()
        })
        .sum::<f64>()
}


/// Returns the gini index of the given class counts:
/// ```txt
/// G = 1 - Σ (c[i] / N)^2,  N = Σ c[i].
/// ```
///
/// # Panics
/// Panics if the total count is zero.
#[inline]
pub fn gini_index<I>(counts: I) -> f64
    where I: IntoIterator<Item = usize>,
          I::IntoIter: Clone,
{
    let counts = counts.into_iter();
    let total = counts.clone().sum::<usize>();
    checkers::non_empty_counts(total);

    let total = total as f64;
    let correct = counts.map(|c| (c as f64 / total).powi(2))
        .sum::<f64>();

    1f64 - correct
}
