//! Counting statistics over a subset of examples.
//!
//! A subset is a slice of references to the examples of a [`Sample`](crate::Sample).
//! Subsets are produced by filtering; examples are never copied.
use std::collections::BTreeMap;

use crate::Example;


/// This is an alias from a class value to its count.
/// The keys are sorted lexicographically,
/// which fixes the tie-break of [`most_common_class`].
pub type ClassCounts<'a> = BTreeMap<&'a str, usize>;


/// For each value of an attribute, in domain order,
/// the class counts of the examples holding that value.
pub type AttributeCounts<'a> = Vec<(&'a str, ClassCounts<'a>)>;


/// Counts the class values of `examples`.
/// Examples without the attribute `class` are ignored.
#[inline]
pub fn class_counts<'a>(examples: &[&'a Example], class: &str)
    -> ClassCounts<'a>
{
    let mut counts = ClassCounts::new();
    for value in examples.iter().filter_map(|ex| ex.get(class)) {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}


/// Returns the class value with the maximal count.
/// If several values share the maximal count,
/// the lexicographically smallest one is returned.
#[inline]
pub fn majority<'a>(counts: &ClassCounts<'a>) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (&value, &count) in counts {
        match best {
            Some((_, c)) if c >= count => {},
            _ => { best = Some((value, count)); },
        }
    }
    best.map(|(value, _)| value)
}


/// Returns the most common class value in `examples`,
/// or `None` if `examples` holds no class value.
#[inline]
pub fn most_common_class<'a>(examples: &[&'a Example], class: &str)
    -> Option<&'a str>
{
    majority(&class_counts(examples, class))
}


/// Returns the examples whose value of `attribute` equals `value`.
/// The relative order is preserved.
/// Examples without `attribute` are excluded.
#[inline]
pub fn pertinent_examples<'a>(
    examples: &[&'a Example],
    attribute: &str,
    value: &str,
) -> Vec<&'a Example>
{
    examples.iter()
        .copied()
        .filter(|ex| ex.get(attribute) == Some(value))
        .collect()
}


/// Returns the class counts for each value in `values`.
/// A value that no example holds gets an empty histogram.
pub fn attribute_counts<'a>(
    examples: &[&'a Example],
    attribute: &str,
    values: &'a [String],
    class: &str,
) -> AttributeCounts<'a>
{
    values.iter()
        .map(|value| {
            let subset = pertinent_examples(examples, attribute, value);
            (value.as_str(), class_counts(&subset, class))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn examples() -> Vec<Example> {
        vec![
            Example::from([("weather", "sunny"), ("play", "yes")]),
            Example::from([("weather", "rainy"), ("play", "no")]),
            Example::from([("weather", "sunny"), ("play", "no")]),
            Example::from([("weather", "sunny"), ("play", "yes")]),
            Example::from([("play", "no")]),
        ]
    }

    #[test]
    fn test_class_counts_01() {
        let examples = examples();
        let subset = examples.iter().collect::<Vec<_>>();
        let counts = class_counts(&subset, "play");
        let exp = ClassCounts::from([("no", 3), ("yes", 2)]);
        assert_eq!(exp, counts, "expected {exp:?}, got {counts:?}.");
    }

    #[test]
    fn test_class_counts_02() {
        let counts = class_counts(&[], "play");
        assert!(counts.is_empty(), "expected empty, got {counts:?}.");
    }

    #[test]
    fn test_most_common_class_01() {
        let examples = examples();
        let subset = examples.iter().collect::<Vec<_>>();
        let res = most_common_class(&subset, "play");
        assert_eq!(Some("no"), res, "expected Some(\"no\"), got {res:?}.");
    }

    #[test]
    fn test_most_common_class_02() {
        let res = most_common_class(&[], "play");
        assert!(res.is_none(), "expected None, got {res:?}.");
    }

    #[test]
    fn test_majority_tie_01() {
        let counts = ClassCounts::from([("yes", 2), ("maybe", 2), ("no", 1)]);
        let res = majority(&counts);
        assert_eq!(Some("maybe"), res, "expected Some(\"maybe\"), got {res:?}.");
    }

    #[test]
    fn test_pertinent_examples_01() {
        let examples = examples();
        let subset = examples.iter().collect::<Vec<_>>();
        let res = pertinent_examples(&subset, "weather", "sunny");
        assert_eq!(res.len(), 3);
        assert!(std::ptr::eq(res[0], &examples[0]));
        assert!(std::ptr::eq(res[1], &examples[2]));
        assert!(std::ptr::eq(res[2], &examples[3]));
    }

    #[test]
    fn test_attribute_counts_01() {
        let examples = examples();
        let subset = examples.iter().collect::<Vec<_>>();
        let values = ["sunny", "rainy", "foggy"].map(String::from);
        let res = attribute_counts(&subset, "weather", &values, "play");
        let exp = vec![
            ("sunny", ClassCounts::from([("no", 1), ("yes", 2)])),
            ("rainy", ClassCounts::from([("no", 1)])),
            ("foggy", ClassCounts::new()),
        ];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }
}
