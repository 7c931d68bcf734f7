use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use passkeep::password_generation::{DEFAULT_LENGTH, MAX_UI_LENGTH, MIN_UI_LENGTH};

mod menu;
mod operations;
mod table;

#[derive(Parser)]
#[command(about = "A local password generator, strength checker and credential store.")]
struct Args {
    /// The password file to read and write.
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Log what's happening to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a random password.
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
        length: usize,
    },
    /// Rate the strength of a password, which is prompted for.
    Check,
    /// Store a username and the hash of a password (which is prompted for) under a site name.
    Store { site: String, username: String },
    /// Show the username and password hash stored for a site.
    Retrieve { site: String },
    /// Pick operations from an interactive menu. This is the default.
    Menu,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let store = open_store(args.store);
    match args.command.unwrap_or(Command::Menu) {
        Command::Generate { length } => operations::generate(length)?,
        Command::Check => operations::check_strength()?,
        Command::Store { site, username } => operations::store_password(&store, &site, &username)?,
        Command::Retrieve { site } => operations::retrieve_password(&store, &site)?,
        Command::Menu => menu::run_menu(&store)?,
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        tracing::debug!(error = ?err, "exiting with an error");
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("passkeep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passkeep=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(store_path: Option<PathBuf>) -> passkeep::CredentialStore {
    let path = store_path.unwrap_or_else(passkeep::CredentialStore::default_path);
    tracing::debug!(path = %path.display(), "using credential store");
    passkeep::CredentialStore::new(path)
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("`{s}` isn't a whole number"))?;
    if (MIN_UI_LENGTH..=MAX_UI_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "length must be between {MIN_UI_LENGTH} and {MAX_UI_LENGTH}"
        ))
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Menu cancelled; exiting.")]
    MenuCancelled,
    #[error("Error: {0}")]
    Vault(passkeep::VaultError),
    #[error("Error: {0:#}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passkeep::VaultError> for ProgError {
    fn from(err: passkeep::VaultError) -> ProgError {
        ProgError::Vault(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length("4"), Ok(4));
        assert_eq!(parse_length("50"), Ok(50));
        assert!(parse_length("3").is_err());
        assert!(parse_length("51").is_err());
        assert!(parse_length("-1").is_err());
        assert!(parse_length("twelve").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["passkeep", "--store", "/tmp/p.json", "retrieve", "a.com"])
            .unwrap();
        assert_eq!(args.store, Some(PathBuf::from("/tmp/p.json")));
        assert!(matches!(args.command, Some(Command::Retrieve { site }) if site == "a.com"));

        let args = Args::try_parse_from(["passkeep", "generate"]).unwrap();
        assert!(matches!(args.command, Some(Command::Generate { length: 12 })));

        let args = Args::try_parse_from(["passkeep"]).unwrap();
        assert!(args.command.is_none());

        assert!(Args::try_parse_from(["passkeep", "generate", "--length", "60"]).is_err());
    }
}
