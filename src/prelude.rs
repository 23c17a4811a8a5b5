//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Example,
    Domains,
    Sample,
    SampleReader,
};


pub use crate::learner::Learner;
pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    SplitBy,
};


pub use crate::logging::{
    Logger,
    LoggerBuilder,
};


pub use crate::error::TreeError;
