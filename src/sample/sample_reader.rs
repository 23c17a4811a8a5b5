use std::path::Path;

use super::sample_struct::Sample;
use crate::error::Result;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a comma-separated file
/// of categorical values to [`Sample`].
/// The attribute domains are inferred from the file.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self { file: None, has_header: false, target: None, }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let Some(file) = self.file else {
            panic!("The file name for csv is not set");
        };
        let Some(target) = self.target else {
            panic!(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );
        };
        Sample::from_csv(file, self.has_header, target)
    }
}
