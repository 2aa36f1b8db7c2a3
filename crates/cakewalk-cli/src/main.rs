use anyhow::Result;
use cakewalk_cli::{MarkerArg, OutputFormat, commands};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cakewalk")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "UI regression suite for the Cake DeFi marketing website",
    long_about = "Cakewalk drives a real Chrome browser against the Cake DeFi marketing \
                  site and checks the landing page: the header logo, the navigation bar \
                  labels, and the learn-and-earn lesson cards."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the registered checks against the site
    Run {
        /// Only run checks carrying this marker
        #[arg(long, value_enum)]
        marker: Option<MarkerArg>,

        /// Path to the Chrome binary
        #[arg(long, env = "CAKEWALK_CHROME")]
        chrome_path: Option<PathBuf>,

        /// Site to run against
        #[arg(long, env = "CAKEWALK_BASE_URL", default_value = cakewalk_suite::DEFAULT_BASE_URL)]
        base_url: String,

        /// Run Chrome with a visible window
        #[arg(long)]
        headed: bool,

        /// Named persistent Chrome profile instead of a temporary one
        #[arg(long)]
        profile: Option<String>,

        /// Write the JSON run report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the registered checks
    List,

    /// Locate the Chrome binary the suite would use
    Chrome {
        /// Path to the Chrome binary
        #[arg(long, env = "CAKEWALK_CHROME")]
        chrome_path: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            marker,
            chrome_path,
            base_url,
            headed,
            profile,
            output,
        } => commands::run::execute(
            marker.map(Into::into),
            chrome_path,
            base_url,
            headed,
            profile,
            output,
            cli.format,
        ),
        Commands::List => commands::list::execute(cli.format),
        Commands::Chrome { chrome_path } => commands::chrome::execute(chrome_path),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("cakewalk_cli=debug,cakewalk_suite=debug,cakewalk_browser=debug")
    } else {
        EnvFilter::new("cakewalk_cli=info,cakewalk_suite=info,cakewalk_browser=info")
    };

    // Keep stdout clean for --format json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
