//! Multi-way decision trees over categorical attributes.
//!
//! [`DecisionTreeBuilder`] configures a [`DecisionTree`] learner,
//! which grows a [`DecisionTreeClassifier`].

/// Defines the splitting criteria and the gain functions.
pub mod split_by;
/// Defines the chi-squared test used for pruning.
pub mod pruning;
/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;

mod node;
mod depth;
mod builder;


pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use depth::Depth;
pub use dtree::DecisionTree;
pub use node::Node;
pub use split_by::SplitBy;
