use crate::classifier::{classify, Field};
use crate::selftest::{self, SelfTestReport};
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use colored::*;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug, Clone)]
#[command(name = "vertica-pkginfo")]
#[command(version, about = "Extract information from vertica distro filename", long_about = None)]
#[command(group(
    ArgGroup::new("query")
        .required(true)
        .multiple(true)
        .args(["test", "show_arch", "show_file_type", "show_os", "show_version", "json"])
))]
pub struct Args {
    /// Print architecture software intended for
    #[arg(short = 'a', value_name = "FILENAME")]
    pub show_arch: Option<String>,

    /// Print file type
    #[arg(short = 'f', value_name = "FILENAME")]
    pub show_file_type: Option<String>,

    /// Print operating system software intended for
    #[arg(short = 'o', value_name = "FILENAME")]
    pub show_os: Option<String>,

    /// Print Vertica version
    #[arg(short = 'v', value_name = "FILENAME")]
    pub show_version: Option<String>,

    /// Print everything as JSON
    #[arg(short = 'j', long, value_name = "FILENAME")]
    pub json: Option<String>,

    /// Run tests
    #[arg(short = 't')]
    pub test: bool,

    /// Extra test cases (TOML) for -t
    #[arg(short = 'c', long, value_name = "FILE", requires = "test")]
    pub cases: Option<PathBuf>,

    /// Debug logging
    #[arg(long)]
    pub verbose: bool,
}

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn run(args: &Args) -> Result<ExitCode> {
    if args.test {
        return run_self_test(args.cases.as_deref());
    }

    let queries = [
        (args.show_arch.as_deref(), Field::Arch),
        (args.show_file_type.as_deref(), Field::FileType),
        (args.show_os.as_deref(), Field::OsType),
        (args.show_version.as_deref(), Field::Version),
    ];

    if let Some((filename, field)) = queries
        .into_iter()
        .find_map(|(filename, field)| filename.map(|f| (f, field)))
    {
        debug!("Querying {:?} of {}", field, filename);
        let descriptor = classify(filename)?;
        println!("{}", descriptor.field(field));
        return Ok(ExitCode::SUCCESS);
    }

    let filename = args
        .json
        .as_deref()
        .context("No filename given; use one of -a, -f, -o, -v, -j or -t")?;
    let descriptor = classify(filename)?;
    let json = serde_json::to_string(&descriptor).context("Failed to serialize descriptor")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

fn run_self_test(extra: Option<&Path>) -> Result<ExitCode> {
    let mut cases = selftest::builtin_cases();
    if let Some(path) = extra {
        let loaded = selftest::load_cases(path)?;
        info!("Loaded {} cases from {}", loaded.len(), path.display());
        cases.extend(loaded);
    }

    let report = selftest::run(&cases);
    print_report(&report);

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &SelfTestReport) {
    for outcome in &report.outcomes {
        let line = outcome.to_string();
        if outcome.passed {
            println!("{}", line);
        } else {
            println!("{}", line.red());
        }
    }

    if report.passed() {
        println!("{}", report.summary().green());
    } else {
        println!("{}", report.summary().red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_query_flags() {
        let args = Args::try_parse_from(["vertica-pkginfo", "-v", "vertica.latest.deb"]).unwrap();
        assert_eq!(args.show_version.as_deref(), Some("vertica.latest.deb"));
        assert!(!args.test);

        let args = Args::try_parse_from(["vertica-pkginfo", "-t"]).unwrap();
        assert!(args.test);
    }

    #[test]
    fn test_query_required() {
        assert!(Args::try_parse_from(["vertica-pkginfo"]).is_err());
        assert!(Args::try_parse_from(["vertica-pkginfo", "--verbose"]).is_err());
    }

    #[test]
    fn test_cases_requires_test_flag() {
        assert!(Args::try_parse_from(["vertica-pkginfo", "-c", "x.toml", "-v", "vertica.latest.deb"]).is_err());
    }

    #[test]
    fn test_run_without_query_fails() {
        let args = Args {
            show_arch: None,
            show_file_type: None,
            show_os: None,
            show_version: None,
            json: None,
            test: false,
            cases: None,
            verbose: false,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("No filename given"));
    }

    #[test]
    fn test_run_propagates_classification_error() {
        let args = Args::try_parse_from(["vertica-pkginfo", "-o", "notvertica.rpm"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("missing vertica prefix"));
    }
}
