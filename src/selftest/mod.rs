pub mod cases;

pub use cases::{builtin_cases, load_cases, parse_cases, Expectation, SelfTestCase};

use crate::classifier::{classify, ClassificationError, ReleaseDescriptor};
use log::debug;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub input: String,
    pub expected: Expectation,
    pub actual: Result<ReleaseDescriptor, ClassificationError>,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl CaseOutcome {
    fn actual_display(&self) -> String {
        match &self.actual {
            Ok(desc) => desc.to_string(),
            Err(e) => e.kind().to_string(),
        }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "{} result was {}", self.input, self.actual_display())
        } else {
            write!(
                f,
                "***** ERROR ****: {} result was {} instead of {}",
                self.input,
                self.actual_display(),
                self.expected
            )
        }
    }
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn summary(&self) -> &'static str {
        if self.passed() {
            "No errors"
        } else {
            "There were errors"
        }
    }
}

pub fn run(cases: &[SelfTestCase]) -> SelfTestReport {
    let outcomes = cases
        .iter()
        .map(|case| {
            let actual = classify(&case.input);
            let passed = match (&case.expect, &actual) {
                (Expectation::Descriptor(want), Ok(got)) => want == got,
                (Expectation::Error(kind), Err(e)) => *kind == e.kind(),
                _ => false,
            };
            debug!("self-test {}: passed={}", case.input, passed);
            CaseOutcome {
                input: case.input.clone(),
                expected: case.expect.clone(),
                actual,
                passed,
            }
        })
        .collect();

    SelfTestReport { outcomes }
}
