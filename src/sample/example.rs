use serde::{Serialize, Deserialize};

use std::collections::HashMap;


/// A single categorical example.
/// An `Example` maps attribute names to attribute values,
/// including the value of the class attribute.
///
/// Examples are immutable once constructed.
///
/// # Example
/// ```
/// use minitree::Example;
/// let example = Example::from([("weather", "sunny"), ("play", "yes")]);
/// assert_eq!(example.get("weather"), Some("sunny"));
/// assert_eq!(example.get("wind"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    values: HashMap<String, String>,
}


impl Example {
    /// Returns the value of `attribute`,
    /// or `None` if this example does not hold it.
    #[inline]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }


    /// Returns `true` if this example holds a value for `attribute`.
    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }


    /// Returns the number of attributes held by this example.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this example holds no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Iterates over the `(attribute, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}


impl<K, V> FromIterator<(K, V)> for Example
    where K: Into<String>,
          V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (K, V)>
    {
        let values = iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}


impl<K, V, const N: usize> From<[(K, V); N]> for Example
    where K: Into<String>,
          V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
