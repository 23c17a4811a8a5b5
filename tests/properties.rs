use minitree::Example;
use minitree::impurity::{set_entropy, gini_index};
use minitree::decision_tree::split_by::{information_gain, gini_gain};

use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;


fn values(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}


fn examples(rows: &[(usize, usize)]) -> Vec<Example> {
    rows.iter()
        .map(|&(a, y)| {
            Example::from([("a", format!("v{a}")), ("y", format!("c{y}"))])
        })
        .collect()
}


proptest! {
    #[test]
    fn impurity_is_non_negative(
        counts in prop::collection::vec(0usize..50, 1..8)
            .prop_filter("positive total", |c| c.iter().sum::<usize>() > 0)
    ) {
        let entropy = set_entropy(counts.iter().copied());
        let gini = gini_index(counts.iter().copied());
        prop_assert!(entropy >= -TOLERANCE, "entropy {} < 0", entropy);
        prop_assert!(gini >= -TOLERANCE, "gini {} < 0", gini);

        // Both are zero exactly when a single class is present.
        let n_classes = counts.iter().filter(|&&c| c > 0).count();
        if n_classes == 1 {
            prop_assert!(entropy.abs() < TOLERANCE);
            prop_assert!(gini.abs() < TOLERANCE);
        } else {
            prop_assert!(entropy > TOLERANCE);
            prop_assert!(gini > TOLERANCE);
            prop_assert!(entropy <= (n_classes as f64).log2() + TOLERANCE);
        }
    }


    #[test]
    fn information_gain_is_non_negative(
        rows in prop::collection::vec((0usize..4, 0usize..3), 1..40)
    ) {
        let examples = examples(&rows);
        let subset = examples.iter().collect::<Vec<_>>();
        let gain = information_gain(&subset, "a", &values(4), "y");
        prop_assert!(gain >= -TOLERANCE, "information gain {} < 0", gain);

        let gini = gini_gain(&subset, "a", &values(4), "y");
        prop_assert!(gini >= 1f64 - TOLERANCE, "gini gain {} < 1", gini);
    }


    #[test]
    fn independent_attribute_has_no_gain(
        block in prop::collection::vec(1usize..6, 2..4),
        n_values in 1usize..5,
    ) {
        // Every value of `a` holds the same class histogram.
        let rows = (0..n_values)
            .flat_map(|a| {
                block.iter()
                    .enumerate()
                    .flat_map(move |(y, &n)| std::iter::repeat((a, y)).take(n))
            })
            .collect::<Vec<_>>();
        let examples = examples(&rows);
        let subset = examples.iter().collect::<Vec<_>>();
        let gain = information_gain(&subset, "a", &values(n_values), "y");
        prop_assert!(gain.abs() < TOLERANCE, "expected 0, got {}", gain);
    }
}
