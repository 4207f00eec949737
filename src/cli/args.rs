use crate::utils::output::OutputKind;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursecity-cert")]
#[command(version = "1.0.0")]
#[command(about = "Issue CourseCity Academy course-completion certificates")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file path (default: ~/.config/coursecity-cert/config.yaml)
    #[arg(long, env = "COURSECITY_CERT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more verbosity: -v DEBUG, -vv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output raw tab-separated values (no formatting)
    #[arg(short, long)]
    pub raw: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Issue a course-completion certificate
    Issue {
        /// Student name
        student: String,
        /// Course title
        course: String,
        /// Completion date, stored as given (default: today, YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Print every field instead of the one-line summary
        #[arg(long)]
        details: bool,
    },
    /// Issue a sample certificate for John Doe
    Demo,
    /// Generate shell completion scripts
    Completion {
        #[command(subcommand)]
        command: CompletionCommands,
    },
}

#[derive(Subcommand)]
pub enum CompletionCommands {
    /// Generate bash completion script
    Bash,
    /// Generate zsh completion script
    Zsh,
    /// Generate fish completion script
    Fish,
    /// Generate PowerShell completion script
    PowerShell,
}

impl CompletionCommands {
    pub fn shell(&self) -> Shell {
        match self {
            CompletionCommands::Bash => Shell::Bash,
            CompletionCommands::Zsh => Shell::Zsh,
            CompletionCommands::Fish => Shell::Fish,
            CompletionCommands::PowerShell => Shell::PowerShell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_issue() {
        let cli = Cli::try_parse_from([
            "coursecity-cert",
            "-vv",
            "--format",
            "json",
            "issue",
            "John Doe",
            "Advanced Python Masterclass",
            "--date",
            "2026-02-11",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputKind::Json));
        match cli.command {
            Commands::Issue {
                student,
                course,
                date,
                details,
            } => {
                assert_eq!(student, "John Doe");
                assert_eq!(course, "Advanced Python Masterclass");
                assert_eq!(date.as_deref(), Some("2026-02-11"));
                assert!(!details);
            }
            _ => panic!("expected issue command"),
        }
    }

    #[test]
    fn test_parse_issue_accepts_empty_strings() {
        let cli = Cli::try_parse_from(["coursecity-cert", "issue", "", "", "--date", ""]).unwrap();
        match cli.command {
            Commands::Issue {
                student,
                course,
                date,
                ..
            } => {
                assert_eq!(student, "");
                assert_eq!(course, "");
                assert_eq!(date.as_deref(), Some(""));
            }
            _ => panic!("expected issue command"),
        }
    }

    #[test]
    fn test_parse_demo_and_completion() {
        let cli = Cli::try_parse_from(["coursecity-cert", "-q", "demo"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Demo));

        let cli = Cli::try_parse_from(["coursecity-cert", "completion", "zsh"]).unwrap();
        match cli.command {
            Commands::Completion { command } => assert_eq!(command.shell(), Shell::Zsh),
            _ => panic!("expected completion command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["coursecity-cert", "--format", "xml", "demo"]).is_err());
    }
}
