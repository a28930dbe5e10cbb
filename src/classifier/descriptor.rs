use serde::{Deserialize, Serialize};
use std::fmt;

/// What a Vertica package filename says about the artifact it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// Version and hotfix, e.g. `10.1.1-5`, or `latest`
    pub version: String,
    /// `amd64`, `_amd64`, `x86_64`, or `unknown`
    pub arch: String,
    /// `centos`, `SUSE`, or `debian`
    pub os_type: String,
    /// `rpm` or `deb`
    pub file_type: String,
}

/// A single descriptor field, as selected by the CLI query flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    Arch,
    OsType,
    FileType,
}

impl ReleaseDescriptor {
    pub fn new(
        version: impl Into<String>,
        arch: impl Into<String>,
        os_type: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            arch: arch.into(),
            os_type: os_type.into(),
            file_type: file_type.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Version => &self.version,
            Field::Arch => &self.arch,
            Field::OsType => &self.os_type,
            Field::FileType => &self.file_type,
        }
    }
}

impl fmt::Display for ReleaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version={} arch={} os_type={} file_type={}",
            self.version, self.arch, self.os_type, self.file_type
        )
    }
}
