use clap::{Parser, Subcommand};
use packrat::profile::ProfileKind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "packrat",
    bin_name = "packrat",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Run without a command to open the menu.\nProfiles: novice, master, comparison, tower (see `packrat profiles`)."
)]
#[command(about = "Teaching inventory manager: sorts and searches that count their comparisons", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Profile to open (skips the picker)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub profile: Option<ProfileKind>,

    /// Capacity of the array store (initial size when it grows)
    #[arg(short, long, global = true, value_parser = parse_capacity, help_heading = "Options")]
    pub capacity: Option<usize>,

    /// Directory holding config.json [env: PACKRAT_CONFIG_DIR]
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List the available profiles
    Profiles,

    /// Show or change configuration
    Config {
        /// Configuration key (profile, capacity, color)
        key: Option<String>,

        /// New value; `none` clears profile or capacity
        value: Option<String>,
    },
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("capacity must be a positive integer, got '{}'", value)),
    }
}
