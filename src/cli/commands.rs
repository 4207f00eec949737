use crate::cert::{Certificate, CertificateIssuer, Clock};
use crate::cli::args::*;
use crate::cli::completions::write_completion;
use crate::utils::config::Config;
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use chrono::Utc;
use std::io::{self, Write};

pub const DEMO_STUDENT: &str = "John Doe";
pub const DEMO_COURSE: &str = "Advanced Python Masterclass";
pub const DEMO_DATE: &str = "2026-02-11";

pub fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "coursecity_cert=info",  // Default: issuance notices
            1 => "coursecity_cert=debug", // -v: debug level
            _ => "coursecity_cert=trace", // -vv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let config = Config::load(cli.config.as_deref())?;
    let issuer = CertificateIssuer::new();
    run_command(&cli, &config, &issuer, &mut io::stdout().lock())
}

/// Execute a parsed command, writing its result to `out`.
///
/// Command-line flags override the config file. `demo` ignores both and
/// always writes the one-line summary.
pub fn run_command<C, W>(
    cli: &Cli,
    config: &Config,
    issuer: &CertificateIssuer<C>,
    out: &mut W,
) -> Result<()>
where
    C: Clock,
    W: Write,
{
    match &cli.command {
        Commands::Issue {
            student,
            course,
            date,
            details,
        } => {
            let output = OutputFormat::new(
                cli.raw || config.raw,
                cli.format.or(config.format).unwrap_or_default(),
            );
            let date = date.clone().unwrap_or_else(today);
            let certificate = issuer.issue(student, course, &date);
            let rendered =
                output.render_certificate(&certificate, *details || config.details)?;
            writeln!(out, "{rendered}")?;
        }
        Commands::Demo => {
            let certificate = issue_demo(issuer);
            writeln!(out, "{certificate}")?;
        }
        Commands::Completion { command } => write_completion(command.shell(), out),
    }

    Ok(())
}

/// Issue the sample certificate shown by `demo`
pub fn issue_demo<C: Clock>(issuer: &CertificateIssuer<C>) -> Certificate {
    issuer.issue(DEMO_STUDENT, DEMO_COURSE, DEMO_DATE)
}

/// Today's UTC date as YYYY-MM-DD
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
