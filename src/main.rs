use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pa_store::cli::{handle_command, Commands as StoreCommands, Context};
use pa_store::config::{PaPaths, Settings, SettingsArgs};
use pa_store::crypto::AgeCli;
use pa_store::services::CredentialService;
use pa_store::storage::PasswordStore;
use pa_store::ui::TerminalHost;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PA_LOG";

#[derive(Parser)]
#[command(
    name = "pa",
    version,
    about = "A minimal password store",
    long_about = "pa keeps one age-encrypted file per site and account. \
                  Passwords are encrypted and decrypted by an external age \
                  binary; pa itself never writes a secret to disk in the clear."
)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Store(StoreCommands),

    /// Show current configuration and paths
    Config,
}

fn main() {
    // Logs go to stderr so stdout stays clean for listings
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("pa_store=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = PaPaths::new().context("Failed to resolve the store directory")?;
    let settings = Settings::from(cli.settings);
    settings.validate()?;

    match cli.command {
        Some(Commands::Store(cmd)) => {
            paths
                .ensure_directories()
                .context("Failed to prepare the store directory")?;

            let store = PasswordStore::new(paths.passwords_dir());
            let cipher = AgeCli::from_config(&paths, &settings);
            let host = TerminalHost::new(settings.clipboard_clear);
            let ctx = Context {
                host: &host,
                service: CredentialService::new(&store, &cipher),
                settings: &settings,
            };

            handle_command(&ctx, cmd)?;
        }
        Some(Commands::Config) => {
            println!("pa Configuration");
            println!("================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Passwords:        {}", paths.passwords_dir().display());
            println!("Identities file:  {}", paths.identities_file().display());
            println!("Recipients file:  {}", paths.recipients_file().display());
            println!();
            println!("Settings:");
            println!("  Password length:   {}", settings.password_length);
            println!("  Password pattern:  {}", settings.password_pattern);
            println!("  Alignment:         {:?}", settings.align);
            println!("  Encryption tool:   {}", settings.age_binary);
            println!("  Tool timeout:      {}s", settings.crypto_timeout.as_secs());
            println!("  Clipboard clear:   {}s", settings.clipboard_clear.as_secs());
        }
        None => {
            println!("pa - a minimal password store");
            println!();
            println!("Run 'pa --help' for usage information.");
            println!("Run 'pa add' to store your first password.");
        }
    }

    Ok(())
}
