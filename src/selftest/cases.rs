use crate::classifier::{ErrorKind, ReleaseDescriptor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// What classifying a case's input should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Descriptor(ReleaseDescriptor),
    Error(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestCase {
    pub input: String,
    pub expect: Expectation,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(default)]
    case: Vec<SelfTestCase>,
}

impl SelfTestCase {
    pub fn ok(input: &str, version: &str, arch: &str, os_type: &str, file_type: &str) -> Self {
        Self {
            input: input.to_string(),
            expect: Expectation::Descriptor(ReleaseDescriptor::new(version, arch, os_type, file_type)),
        }
    }

    pub fn err(input: &str, kind: ErrorKind) -> Self {
        Self {
            input: input.to_string(),
            expect: Expectation::Error(kind),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Descriptor(desc) => write!(f, "{}", desc),
            Expectation::Error(kind) => write!(f, "{}", kind),
        }
    }
}

/// Filenames as the Vertica packaging pipeline actually produces them.
pub fn builtin_cases() -> Vec<SelfTestCase> {
    vec![
        SelfTestCase::ok("vertica_10.1.1-5_amd64.deb", "10.1.1-5", "amd64", "debian", "deb"),
        SelfTestCase::ok("vertica_11.0.0-20210723_amd64.deb", "11.0.0-20210723", "amd64", "debian", "deb"),
        SelfTestCase::ok("vertica-10.1.1-5.x86_64.RHEL6.rpm", "10.1.1-5", "x86_64", "centos", "rpm"),
        SelfTestCase::ok("vertica-10.1.1-5.x86_64.SUSE.rpm", "10.1.1-5", "x86_64", "SUSE", "rpm"),
        SelfTestCase::ok("vertica-11.0.0-20210723.x86_64.RHEL6.rpm", "11.0.0-20210723", "x86_64", "centos", "rpm"),
        SelfTestCase::ok("vertica-x86_64.RHEL6.latest.rpm", "latest", "x86_64", "centos", "rpm"),
        SelfTestCase::ok("vertica.latest.deb", "latest", "unknown", "debian", "deb"),
        SelfTestCase::err("notvertica.rpm", ErrorKind::InvalidPrefix),
        SelfTestCase::err("vertica-unknownformat.tar.gz", ErrorKind::UnrecognizedFormat),
    ]
}

/// Read extra cases from a TOML file of `[[case]]` tables.
pub fn load_cases(path: &Path) -> Result<Vec<SelfTestCase>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read case file {}", path.display()))?;
    parse_cases(&content)
        .with_context(|| format!("Failed to parse case file {}", path.display()))
}

pub fn parse_cases(content: &str) -> Result<Vec<SelfTestCase>> {
    let file: CaseFile = toml::from_str(content)?;
    Ok(file.case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cases() {
        let content = r#"
[[case]]
input = "vertica_12.0.0-1_amd64.deb"
expect = { descriptor = { version = "12.0.0-1", arch = "amd64", os_type = "debian", file_type = "deb" } }

[[case]]
input = "other.rpm"
expect = { error = "invalid_prefix" }
"#;
        let cases = parse_cases(content).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(
            cases[0],
            SelfTestCase::ok("vertica_12.0.0-1_amd64.deb", "12.0.0-1", "amd64", "debian", "deb")
        );
        assert_eq!(cases[1], SelfTestCase::err("other.rpm", ErrorKind::InvalidPrefix));
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_cases("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_error_kind() {
        let content = r#"
[[case]]
input = "vertica.zip"
expect = { error = "bad_checksum" }
"#;
        assert!(parse_cases(content).is_err());
    }
}
