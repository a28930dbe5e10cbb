use super::ReleaseDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;

static RPM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^vertica-(.*)\.(_amd64|x86_64)\.(RHEL6|SUSE)\.rpm$").unwrap()
});

static DEB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^vertica_(.*)_(amd64|x86_64)\.deb$").unwrap()
});

const LATEST: &str = "latest";

/// The known Vertica naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `vertica-x86_64.RHEL6.latest.rpm`
    LatestRpm,
    /// `vertica.latest.deb`
    LatestDeb,
    /// `vertica-10.1.1-5.x86_64.RHEL6.rpm`
    Rpm,
    /// `vertica_10.1.1-5_amd64.deb`
    Deb,
}

/// Evaluation order. The "latest" rules come first because those names
/// never fit the structured patterns.
pub const RULES: [RuleKind; 4] = [
    RuleKind::LatestRpm,
    RuleKind::LatestDeb,
    RuleKind::Rpm,
    RuleKind::Deb,
];

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::LatestRpm => "latest-rpm",
            RuleKind::LatestDeb => "latest-deb",
            RuleKind::Rpm => "rpm",
            RuleKind::Deb => "deb",
        }
    }

    /// Returns the descriptor if `filename` (a base name) follows this convention.
    pub fn apply(&self, filename: &str) -> Option<ReleaseDescriptor> {
        match self {
            // Arch and OS are fixed here even when the name mentions SUSE.
            RuleKind::LatestRpm => (filename.contains(LATEST) && filename.ends_with(".rpm"))
                .then(|| ReleaseDescriptor::new(LATEST, "x86_64", "centos", "rpm")),
            RuleKind::LatestDeb => (filename.contains(LATEST) && filename.ends_with(".deb"))
                .then(|| ReleaseDescriptor::new(LATEST, "unknown", "debian", "deb")),
            RuleKind::Rpm => RPM_REGEX.captures(filename).map(|caps| {
                let os_type = match &caps[3] {
                    "RHEL6" => "centos",
                    other => other,
                };
                ReleaseDescriptor::new(&caps[1], &caps[2], os_type, "rpm")
            }),
            RuleKind::Deb => DEB_REGEX
                .captures(filename)
                .map(|caps| ReleaseDescriptor::new(&caps[1], &caps[2], "debian", "deb")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_rules_need_package_suffix() {
        assert!(RuleKind::LatestRpm.apply("vertica-latest.tar.gz").is_none());
        assert!(RuleKind::LatestDeb.apply("vertica-latest.tar.gz").is_none());
        assert!(RuleKind::LatestRpm.apply("vertica.latest.deb").is_none());
        assert!(RuleKind::LatestDeb.apply("vertica-x86_64.RHEL6.latest.rpm").is_none());
    }

    #[test]
    fn test_rpm_keeps_underscore_arch() {
        let desc = RuleKind::Rpm.apply("vertica-9.3.1-0._amd64.SUSE.rpm").unwrap();
        assert_eq!(desc.arch, "_amd64");
        assert_eq!(desc.os_type, "SUSE");
        assert_eq!(desc.version, "9.3.1-0");
    }

    #[test]
    fn test_rpm_rejects_other_os_tags() {
        assert!(RuleKind::Rpm.apply("vertica-10.1.1-5.x86_64.RHEL8.rpm").is_none());
        assert!(RuleKind::Rpm.apply("vertica-10.1.1-5.amd64.RHEL6.rpm").is_none());
    }

    #[test]
    fn test_deb_version_is_greedy() {
        let desc = RuleKind::Deb.apply("vertica_10.1_1-5_amd64.deb").unwrap();
        assert_eq!(desc.version, "10.1_1-5");

        let desc = RuleKind::Deb.apply("vertica_12.0.0-0_x86_64.deb").unwrap();
        assert_eq!(desc.arch, "x86_64");
    }

    #[test]
    fn test_rule_names_are_distinct() {
        let names: std::collections::HashSet<_> = RULES.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), RULES.len());
    }
}
