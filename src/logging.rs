//! Runs a learner with console and CSV logging.
//! Measures the followings of a training run:
//! - Running time
//! - Size of the tree
//! - Training error
//! - Test error

/// Provides the logger.
pub mod logger;
/// Provides the builder of the logger.
pub mod builder;


pub use logger::Logger;
pub use builder::LoggerBuilder;
