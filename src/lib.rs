pub mod classifier;
pub mod cli;
pub mod selftest;

pub use classifier::{classify, ClassificationError, ErrorKind, Field, ReleaseDescriptor};
