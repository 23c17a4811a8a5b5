//! Struct `Sample` represents a batch of categorical examples.

// Provides example struct.
pub(crate) mod example;
// Provides attribute domains.
pub(crate) mod domain;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use example::Example;
pub use domain::Domains;
