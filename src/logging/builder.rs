use crate::Sample;
use super::Logger;


/// `LoggerBuilder` is a struct to construct `Logger.`
/// You need to specify the followings:
///
/// - Learner (a configured `DecisionTree`),
/// - Training examples, and
/// - Test examples.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let (train, test) = sample.split(0.8, 1234);
///
/// let tree = DecisionTreeBuilder::new(&train)
///     .split_by(SplitBy::Entropy)
///     .prune(0.05)
///     .build();
///
/// let logger = LoggerBuilder::new()
///     .learner(tree)
///     .train_sample(&train)
///     .test_sample(&test)
///     .build();
///
/// let f = logger.run("output.csv")
///     .expect("Failed to run the decision tree");
/// ```
pub struct LoggerBuilder<'a, L> {
    learner: Option<L>,
    train: Option<&'a Sample>,
    test: Option<&'a Sample>,
    verbose: bool,
}


impl<L> Default for LoggerBuilder<'_, L> {
    fn default() -> Self {
        Self::new()
    }
}


impl<'a, L> LoggerBuilder<'a, L> {
    /// Construct a new instance of `LoggerBuilder.`
    pub fn new() -> Self {
        Self {
            learner: None,
            train: None,
            test: None,
            verbose: true,
        }
    }


    /// Set the learner.
    pub fn learner(mut self, learner: L) -> Self {
        self.learner = Some(learner);
        self
    }


    /// Set the training sample.
    pub fn train_sample(mut self, train: &'a Sample) -> Self {
        self.train = Some(train);
        self
    }


    /// Set the test sample.
    pub fn test_sample(mut self, test: &'a Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Set whether the logger prints to the console.
    /// By default, the logger prints the settings and the result.
    #[inline(always)]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build [Logger] from the given components.
    pub fn build(self) -> Logger<'a, L> {
        let learner = self.learner
            .expect("Learner is not specified");
        let train = self.train
            .expect("Training sample is not specified");
        let test = self.test
            .expect("Test sample is not specified");
        let verbose = self.verbose;

        Logger { learner, train, test, verbose, }
    }
}
