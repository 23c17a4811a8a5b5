//! Errors returned by the sample readers, the tree learners,
//! and the classifiers.
use polars::prelude::PolarsError;

/// Errors that can occur while reading samples,
/// growing a tree, or classifying an example.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The example does not agree with the attribute domains
    /// the tree was trained on.
    /// `value` is `None` if the example lacks the attribute.
    #[error(
        "Attribute `{attribute}` has no branch for value {}",
        .value.as_deref().map_or("<missing>".to_string(), |v| format!("`{v}`"))
    )]
    SchemaMismatch {
        /// Attribute tested by the branch node.
        attribute: String,
        /// Value held by the example.
        value: Option<String>,
    },

    /// Training was requested on a sample without examples.
    #[error("The training sample has no example")]
    EmptySample,

    /// A training example lacks the class attribute.
    #[error("Example {row} does not have the class attribute `{class}`")]
    MissingClass {
        /// Index of the example in the sample.
        row: usize,
        /// Name of the class attribute.
        class: String,
    },

    /// A training example lacks a splitting attribute.
    #[error("Example {row} does not have the attribute `{attribute}`")]
    MissingAttribute {
        /// Index of the example in the sample.
        row: usize,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// A training example holds a value outside the attribute domain.
    #[error("Example {row} has value `{value}` outside the domain of `{attribute}`")]
    UnknownValue {
        /// Index of the example in the sample.
        row: usize,
        /// Name of the attribute.
        attribute: String,
        /// The value held by the example.
        value: String,
    },

    /// A splitting attribute has no legal value.
    #[error("The domain of the attribute `{0}` is empty")]
    EmptyDomain(String),

    /// The named attribute is not a column of the sample.
    #[error("The attribute `{0}` does not exist")]
    UnknownAttribute(String),

    /// The statistics library rejected the chi-squared parameters.
    #[error("Chi-squared test failed: {0}")]
    ChiSquared(String),

    /// A CSV row has a different number of columns than the header.
    #[error("Line {line} has {got} columns, expected {expected}")]
    MalformedRow {
        /// 1-indexed line number in the file.
        line: usize,
        /// Number of columns of the header.
        expected: usize,
        /// Number of columns of this row.
        got: usize,
    },

    /// I/O failure while reading a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure inside `polars`.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, TreeError>;
