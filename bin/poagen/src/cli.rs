//! CLI definition and entrypoint to executable

use crate::commands::{genesis, init, keystore};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    EnvFilter,
};

/// Parse CLI options, set up logging and run the chosen command.
pub fn run() -> eyre::Result<()> {
    let opt = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(opt.verbosity.directive())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    match opt.command {
        Commands::Init(command) => command.execute(),
        Commands::Keystore(command) => command.execute(),
        Commands::Genesis(command) => command.execute(),
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a sealer keystore and a genesis spec prefunding it.
    #[command(name = "init")]
    Init(init::InitCommand),
    /// Create a new sealer account and save it in an encrypted keystore.
    #[command(name = "keystore")]
    Keystore(keystore::KeystoreCommand),
    /// Create a Clique consensus genesis spec for an existing sealer.
    #[command(name = "genesis")]
    Genesis(genesis::GenesisCommand),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Proof-of-authority network provisioning", long_about = None)]
struct Cli {
    /// The command to run
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Display")]
struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v      Errors
    /// -vv     Warnings
    /// -vvv    Info
    /// -vvvv   Debug
    /// -vvvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 3, verbatim_doc_comment)]
    verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q', global = true)]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding [Directive] for the given verbosity, or none if
    /// the verbosity corresponds to silent.
    fn directive(&self) -> Directive {
        if self.quiet {
            LevelFilter::OFF.into()
        } else {
            let level = match self.verbosity.saturating_sub(1) {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            };

            format!("poagen::cli={level}").parse().unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_subcommands() {
        for args in [
            vec!["poagen", "init", "--password", "correct-horse"],
            vec!["poagen", "keystore", "--password", "correct-horse", "-o", "out"],
            vec![
                "poagen",
                "genesis",
                "--address",
                "0xdbC4693b31ba07c8E6EF27966be80A6c6d9F0cb7",
                "--chain-id",
                "1337",
            ],
        ] {
            Cli::try_parse_from(args.iter().copied())
                .unwrap_or_else(|err| panic!("{args:?}: {err}"));
        }
    }

    #[test]
    fn verbosity_directive() {
        let cli = Cli::try_parse_from(["poagen", "-q", "init", "--password", "pw"]).unwrap();
        assert_eq!(
            cli.verbosity.directive().to_string().to_lowercase(),
            LevelFilter::OFF.to_string().to_lowercase()
        );

        let cli = Cli::try_parse_from(["poagen", "init", "--password", "pw"]).unwrap();
        assert_eq!(cli.verbosity.directive().to_string().to_lowercase(), "poagen::cli=info");
    }
}
