//! This file defines some functions that checks some pre-conditions
//! E.g., the total count of a histogram, the pruning threshold.

/// Check whether the histogram has a positive total count.
/// Impurity measures are undefined for an empty histogram.
#[inline(always)]
pub fn non_empty_counts(total: usize) {
    assert!(
        total > 0,
        "impurity is undefined for an empty histogram. got total = {total}."
    );
}

/// Check the significance threshold of the chi-squared pruning.
#[inline(always)]
pub fn significance(q: f64) {
    assert!(
        (0f64..=1f64).contains(&q),
        "significance threshold must be in [0, 1]. got {q}."
    );
}

/// Check the maximal depth of a tree.
#[inline(always)]
pub fn max_depth(depth: usize) {
    assert!(depth > 0, "Tree must have positive depth");
}

/// Check the ratio of a holdout split.
#[inline(always)]
pub fn split_ratio(ratio: f64) {
    assert!(
        (0f64..=1f64).contains(&ratio),
        "split ratio must be in [0, 1]. got {ratio}."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_success_01() {
        non_empty_counts(1);
    }

    #[test]
    #[should_panic]
    fn test_counts_failure_01() {
        non_empty_counts(0);
    }

    #[test]
    fn test_significance_success_01() {
        significance(0.05);
    }

    #[test]
    fn test_significance_success_02() {
        significance(0f64);
    }

    #[test]
    fn test_significance_success_03() {
        significance(1f64);
    }

    #[test]
    #[should_panic]
    fn test_significance_failure_01() {
        significance(-0.0001);
    }

    #[test]
    #[should_panic]
    fn test_significance_failure_02() {
        significance(1.0001);
    }

    #[test]
    #[should_panic]
    fn test_max_depth_failure_01() {
        max_depth(0);
    }

    #[test]
    #[should_panic]
    fn test_split_ratio_failure_01() {
        split_ratio(1.5);
    }
}
