#![warn(missing_docs)]

//!
//! A crate that grows decision trees over categorical attributes.
//!
//! Every attribute takes its value from a fixed, finite domain,
//! and every branch node has one child per value of its attribute.
//! The trees are grown top-down by one of two criteria.
//!
//! - Information gain
//!     The attribute that decreases the entropy of the class
//!     the most is chosen for splitting.
//!     See [`SplitBy::Entropy`].
//!
//!
//! - Gini gain
//!     The attribute that minimizes the weighted gini index
//!     of the partition is chosen for splitting.
//!     See [`SplitBy::Gini`].
//!
//! Optionally, every split is tested by the chi-squared test
//! and replaced by a leaf if it is not significant.
//! See [`DecisionTreeBuilder::prune`].
//!
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/restaurant.csv")
//!     .has_header(true)
//!     .target_feature("WillWait")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&sample)
//!     .split_by(SplitBy::Entropy)
//!     .build();
//!
//! let f = tree.produce(&sample).unwrap();
//! println!("{f}");
//! ```

pub mod constants;
pub mod error;
pub mod checkers;

pub mod sample;
pub mod statistics;
pub mod impurity;
pub mod decision_tree;

pub mod learner;
pub mod classifier;

pub mod logging;

pub mod prelude;


pub use sample::{
    Example,
    Domains,
    Sample,
    SampleReader,
};

pub use error::{TreeError, Result};

pub use learner::Learner;
pub use classifier::Classifier;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    SplitBy,
};

pub use logging::{Logger, LoggerBuilder};
