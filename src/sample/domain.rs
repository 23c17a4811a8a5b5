use serde::{Serialize, Deserialize};

use super::example::Example;


/// The attribute domain table.
/// For each attribute, `Domains` holds the ordered list of
/// the values the attribute can take.
///
/// The table is fixed for a training run.
/// The insertion order of the attributes is kept,
/// and it determines the order in which the attributes are examined
/// when growing a tree.
/// A value that no training example holds still has its own branch.
///
/// # Example
/// ```
/// use minitree::Domains;
/// let domains = Domains::new()
///     .insert("weather", ["sunny", "rainy"])
///     .insert("play", ["yes", "no"]);
/// assert_eq!(domains.values("weather").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domains {
    attributes: Vec<(String, Vec<String>)>,
}


impl Domains {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the domain of `name` to `values`.
    /// If `name` already has a domain, it is replaced
    /// but keeps its position.
    pub fn insert<S, I, T>(mut self, name: S, values: I) -> Self
        where S: Into<String>,
              I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let name = name.into();
        let values = values.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, vals)) => { *vals = values; },
            None => { self.attributes.push((name, values)); },
        }
        self
    }


    /// Infer the domains of `attributes` from `examples`.
    /// The values of each attribute are listed in first-seen order.
    pub fn from_examples<S>(attributes: &[S], examples: &[Example]) -> Self
        where S: AsRef<str>
    {
        let attributes = attributes.iter()
            .map(|name| {
                let name = name.as_ref();
                let mut values: Vec<String> = Vec::new();
                for value in examples.iter().filter_map(|ex| ex.get(name)) {
                    if !values.iter().any(|v| v == value) {
                        values.push(value.to_string());
                    }
                }
                (name.to_string(), values)
            })
            .collect();
        Self { attributes }
    }


    /// Returns the legal values of `name`.
    #[inline]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.attributes.iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| &values[..])
    }


    /// Returns `true` if `name` has a domain.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }


    /// Iterates over the attribute names in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }


    /// Iterates over the `(attribute, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.attributes.iter()
            .map(|(name, values)| (name.as_str(), &values[..]))
    }


    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if the table has no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
