pub mod descriptor;
pub mod error;
pub mod rules;

pub use descriptor::{Field, ReleaseDescriptor};
pub use error::{ClassificationError, ErrorKind};
pub use rules::{RuleKind, RULES};

use log::debug;

const PRODUCT_PREFIX: &str = "vertica";

/// Classify a Vertica package filename. Any directory part is ignored.
pub fn classify(filename: &str) -> Result<ReleaseDescriptor, ClassificationError> {
    let base = base_name(filename);

    if !base.starts_with(PRODUCT_PREFIX) {
        return Err(ClassificationError::InvalidPrefix { filename: base.to_string() });
    }

    for rule in RULES {
        if let Some(descriptor) = rule.apply(base) {
            debug!("{} matched rule {}: {}", base, rule.name(), descriptor);
            return Ok(descriptor);
        }
    }

    debug!("{} matched no rule", base);
    Err(ClassificationError::UnrecognizedFormat { filename: base.to_string() })
}

/// Text after the last `/`. A trailing separator leaves an empty name.
fn base_name(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or("")
}
