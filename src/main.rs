use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use razorcheck_core::{CheckConfig, CheckError, StatusState};
use razorcheck_scan::{contains_marker, scan_files};
use razorcheck_status::context::{
    ACCESS_TOKEN_VAR, COLLECTION_URL_VAR, PULL_REQUEST_ID_VAR, REPOSITORY_ID_VAR,
};
use razorcheck_status::StatusReporter;

#[derive(Parser)]
#[command(
    name = "razorcheck",
    version,
    about = "CI policy gate for @code blocks in razor files",
    long_about = "razorcheck scans a directory tree for razor files containing @code blocks\n\
                  and mirrors the verdict as a pull-request status in Azure DevOps.\n\n\
                  Examples:\n  \
                    razorcheck check src/Pages        Fail if any .razor file has an @code block\n  \
                    razorcheck check . --no-status    Check locally without posting a PR status\n  \
                    razorcheck init                   Create a .razorcheck.toml config file\n  \
                    razorcheck doctor                 Check config and pipeline environment"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (default: .razorcheck.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory and fail if the forbidden marker is found
    #[command(long_about = "Scan a directory and fail if the forbidden marker is found.\n\n\
        Posts a pending status to the current pull request, walks the tree for\n\
        files matching the configured extension, scans them for the marker, then\n\
        posts the final status and exits non-zero on a violation.\n\n\
        Status posting needs the Azure Pipelines environment (System.AccessToken,\n\
        Build.Repository.ID, System.PullRequest.PullRequestId, System.CollectionUri);\n\
        outside a PR build each missing value is warned about and the check still runs.\n\n\
        Examples:\n  razorcheck check src/Pages\n  razorcheck check . --no-status")]
    Check {
        /// Directory to scan
        path: PathBuf,

        /// Do not post pull-request statuses
        #[arg(long)]
        no_status: bool,
    },
    /// Create a default .razorcheck.toml configuration file
    #[command(long_about = "Create a default .razorcheck.toml configuration file.\n\n\
        Generates a commented-out template with all available options.\n\
        Fails if .razorcheck.toml already exists.")]
    Init,
    /// Check your razorcheck setup and pipeline environment
    #[command(long_about = "Check your razorcheck setup and pipeline environment.\n\n\
        Verifies the config file parses and reports which of the four values\n\
        needed for status posting are present in the environment.")]
    Doctor,
}

const DEFAULT_CONFIG: &str = r#"# razorcheck configuration
# See: https://github.com/razorcheck/razorcheck

[policy]
# File-name suffix to scan.
# extension = ".razor"
# Forbidden literal substring.
# marker = "@code"

[status]
# How the status entry identifies itself on the pull request.
# context_name = "no-code-block-policy"
# context_genre = "bqc"
# api_version = "7.1"
"#;

/// Scan, then match. Both failure modes propagate to the caller's single
/// fallback branch.
fn check_tree(path: &Path, config: &CheckConfig, verbose: bool) -> Result<bool, CheckError> {
    if verbose {
        eprintln!(
            "Scanning {} for *{} files containing \"{}\"",
            path.display(),
            config.policy.extension,
            config.policy.marker,
        );
    }

    let files = scan_files(path, &config.policy.extension)?;
    let listed: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    println!("Found files: [{}]", listed.join(", "));

    contains_marker(&files, &config.policy.marker)
}

/// Run the full check flow and return the process exit code.
///
/// Pending status, scan, match, final status. Any error from the scan or
/// match lands in the one fallback branch that reports an Error status and
/// fails the run with the raw message. Reporting itself never fails.
async fn run_check(
    path: &Path,
    config: &CheckConfig,
    reporter: Option<&StatusReporter>,
    verbose: bool,
) -> i32 {
    let marker = &config.policy.marker;
    let ext = config.policy.extension_label();

    report(
        reporter,
        StatusState::Pending,
        &format!("Checking for {marker} blocks in {ext} files."),
    )
    .await;

    match check_tree(path, config, verbose) {
        Ok(true) => {
            report(
                reporter,
                StatusState::Failed,
                &format!("Found {marker} blocks in {ext} files."),
            )
            .await;
            eprintln!("{marker} blocks were found in {ext} files.");
            1
        }
        Ok(false) => {
            report(
                reporter,
                StatusState::Succeeded,
                &format!("No {marker} blocks found in any {ext} files."),
            )
            .await;
            println!("No {marker} blocks found in any {ext} files.");
            0
        }
        Err(err) => {
            report(
                reporter,
                StatusState::Error,
                &format!("An unhandled error occurred when searching for {marker} blocks."),
            )
            .await;
            eprintln!("{err}");
            1
        }
    }
}

async fn report(reporter: Option<&StatusReporter>, state: StatusState, description: &str) {
    if let Some(reporter) = reporter {
        reporter.report(state, description).await;
    }
}

fn run_doctor(cli: &Cli) {
    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut check = |ok: bool, label: &str, detail: String| {
        let sym = if ok { "\u{2713}" } else { "\u{2717}" };
        println!("  {sym} {label:<18} {detail}");
        if ok {
            passed += 1;
        } else {
            failed += 1;
        }
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(".razorcheck.toml"));
    if config_path.exists() {
        match CheckConfig::from_file(&config_path) {
            Ok(config) => check(
                true,
                "config_file",
                format!(
                    "{} (extension {}, marker {:?})",
                    config_path.display(),
                    config.policy.extension,
                    config.policy.marker,
                ),
            ),
            Err(err) => check(false, "config_file", format!("{err}")),
        }
    } else {
        check(
            false,
            "config_file",
            format!(
                "{} not found (run 'razorcheck init', defaults apply)",
                config_path.display(),
            ),
        );
    }

    for (label, var) in [
        ("access_token", ACCESS_TOKEN_VAR),
        ("repository_id", REPOSITORY_ID_VAR),
        ("pull_request_id", PULL_REQUEST_ID_VAR),
        ("collection_url", COLLECTION_URL_VAR),
    ] {
        match std::env::var(var) {
            Ok(_) => check(true, label, format!("{var} set")),
            Err(_) => check(false, label, format!("{var} not set")),
        }
    }

    drop(check);
    println!("\n{passed} checks passed, {failed} failed");
    if failed > 0 {
        println!("Status posting is skipped (with warnings) when pipeline values are missing.");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CheckConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = Path::new(".razorcheck.toml");
            if default_path.exists() {
                CheckConfig::from_file(default_path).into_diagnostic()?
            } else {
                CheckConfig::default()
            }
        }
    };

    match cli.command {
        Command::Check {
            ref path,
            no_status,
        } => {
            let reporter = (!no_status).then(|| StatusReporter::new(config.status.clone()));
            let code = run_check(path, &config, reporter.as_ref(), cli.verbose).await;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Command::Init => {
            let path = Path::new(".razorcheck.toml");
            if path.exists() {
                miette::bail!(".razorcheck.toml already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created .razorcheck.toml with default configuration");
        }
        Command::Doctor => {
            run_doctor(&cli);
        }
    }

    Ok(())
}
