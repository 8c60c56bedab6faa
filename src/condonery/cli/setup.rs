use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "condonery", bin_name = "condonery", version = get_version())]
#[command(
    about = "Keep track of property listings and the clients interested in them",
    long_about = "Keep track of property listings and the clients interested in them.\n\n\
                  Without a COMMAND, starts an interactive session reading one command per \
                  line. With a COMMAND, runs it once and exits.\n\n\
                  Example: condonery add n/Sunny Villa a/123 Orchard Rd t/luxury"
)]
pub struct Cli {
    /// Preferences file (default: preferences.json in the Condonery home)
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Directory data file for this run, overriding the preferences
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// A single command to run instead of starting a session
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if one was given.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
