use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use termkit::ColorMode;

#[derive(Parser)]
#[command(name = "ciadmin")]
#[command(version)]
#[command(about = "Verify and compare declarative CI resource collections", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to use colors: auto, always or never
    #[arg(long, default_value = "auto", env = "CIADMIN_COLOR", global = true)]
    pub color: ColorMode,

    /// Config file (default: ~/.config/ciadmin/config.toml)
    #[arg(long, env = "CIADMIN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show differences between generated and current resources
    Diff(DiffArgs),

    /// Load collection files and verify their consistency
    Check {
        /// Collection files (.json or .toml)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a collection
    Show {
        /// Collection file (.json or .toml)
        file: PathBuf,

        /// Print the structured form as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Diff
// ============================================================================

#[derive(Parser)]
pub struct DiffArgs {
    /// Desired-state collection file
    #[arg(long, env = "CIADMIN_GENERATED")]
    pub generated: PathBuf,

    /// Actual-state collection file
    #[arg(long, env = "CIADMIN_CURRENT")]
    pub current: PathBuf,

    /// Ignore resource descriptions in comparisons
    #[arg(long, overrides_with = "include_descriptions")]
    pub ignore_descriptions: bool,

    /// Include resource descriptions in comparisons (default)
    #[arg(long, overrides_with = "ignore_descriptions")]
    pub include_descriptions: bool,

    /// Regular expression limiting the resources compared
    #[arg(long)]
    pub grep: Option<String>,

    /// Only show resource ids added (+), removed (-) or changed (!)
    #[arg(long, overrides_with = "full_diff")]
    pub ids_only: bool,

    /// Show the full textual diff (default)
    #[arg(long, overrides_with = "ids_only")]
    pub full_diff: bool,

    /// Lines of context around each change
    #[arg(short = 'U', long)]
    pub context_lines: Option<usize>,
}

impl DiffArgs {
    /// The description flag given last, if any
    pub fn ignore_descriptions(&self) -> Option<bool> {
        if self.ignore_descriptions {
            Some(true)
        } else if self.include_descriptions {
            Some(false)
        } else {
            None
        }
    }

    /// The output mode flag given last, if any
    pub fn ids_only(&self) -> Option<bool> {
        if self.ids_only {
            Some(true)
        } else if self.full_diff {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn diff_args(cli: Cli) -> DiffArgs {
        match cli.command {
            Command::Diff(args) => args,
            _ => panic!("expected diff"),
        }
    }

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_diff_defaults() {
        let args = diff_args(parse(&[
            "ciadmin",
            "diff",
            "--generated",
            "g.json",
            "--current",
            "c.json",
        ]));
        assert_eq!(args.generated, PathBuf::from("g.json"));
        assert_eq!(args.ignore_descriptions(), None);
        assert_eq!(args.ids_only(), None);
        assert!(args.grep.is_none());
    }

    #[test]
    fn test_description_flags_last_wins() {
        let with = |extra: &[&str]| {
            let mut argv = vec!["ciadmin", "diff", "--generated", "g", "--current", "c"];
            argv.extend_from_slice(extra);
            diff_args(parse(&argv))
        };
        let ignore = with(&["--include-descriptions", "--ignore-descriptions"]);
        assert_eq!(ignore.ignore_descriptions(), Some(true));
        let include = with(&["--ignore-descriptions", "--include-descriptions"]);
        assert_eq!(include.ignore_descriptions(), Some(false));
        let full = with(&["--ids-only", "--full-diff"]);
        assert_eq!(full.ids_only(), Some(false));
        let ids = with(&["--full-diff", "--ids-only"]);
        assert_eq!(ids.ids_only(), Some(true));
    }

    #[test]
    fn test_color_mode_value() {
        let cli = parse(&["ciadmin", "--color", "never", "check", "a.json"]);
        assert_eq!(cli.color, ColorMode::Never);
        let bad = Cli::try_parse_from(["ciadmin", "--color", "sometimes", "check", "a.json"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["ciadmin", "check"]).is_err());
    }
}
