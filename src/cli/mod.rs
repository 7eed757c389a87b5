//! CLI command handlers
//!
//! This module contains the interactive workflows, bridging the clap argument
//! parsing with the credential service. Every workflow returns an [`Outcome`]
//! that the dispatcher turns into one status line.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod rename;
pub mod show;
mod target;

use std::fmt;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::PaResult;
use crate::models::Entry;
use crate::services::CredentialService;
use crate::ui::Host;

/// Store subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new password
    Add {
        /// Site the account belongs to
        site: Option<String>,
        /// Account name on the site
        account: Option<String>,
        /// Generate the password instead of asking
        #[arg(short, long)]
        generate: bool,
    },
    /// Copy a password to the clipboard
    Show {
        /// Site, or a filter for the selector
        site: Option<String>,
        /// Account name on the site
        account: Option<String>,
    },
    /// Replace an existing password
    Edit {
        /// Site, or a filter for the selector
        site: Option<String>,
        /// Account name on the site
        account: Option<String>,
        /// Generate the new password instead of asking
        #[arg(short, long)]
        generate: bool,
    },
    /// Delete a password
    #[command(alias = "del")]
    Delete {
        /// Site, or a filter for the selector
        site: Option<String>,
        /// Account name on the site
        account: Option<String>,
    },
    /// Rename a password's site and/or account
    #[command(alias = "mv")]
    Rename {
        /// Current site, or a filter for the selector
        site: Option<String>,
        /// Current account
        account: Option<String>,
        /// New site (asked for when omitted)
        new_site: Option<String>,
        /// New account (asked for when omitted)
        new_account: Option<String>,
    },
    /// List stored entries
    #[command(alias = "ls")]
    List,
}

/// Everything a workflow needs
pub struct Context<'a> {
    pub host: &'a dyn Host,
    pub service: CredentialService<'a>,
    pub settings: &'a Settings,
}

/// What a finished workflow did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { entry: Entry, generated: bool },
    Copied(Entry),
    Edited { entry: Entry, generated: bool },
    Deleted(Entry),
    Renamed { from: Entry, to: Entry },
    Unchanged(Entry),
    Listed(Vec<String>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generated = |g: &bool| if *g { " with a generated password" } else { "" };
        match self {
            Outcome::Added { entry, generated: g } => write!(f, "Added {}{}", entry, generated(g)),
            Outcome::Copied(entry) => write!(f, "Copied {} to the clipboard", entry),
            Outcome::Edited { entry, generated: g } => {
                write!(f, "Updated {}{}", entry, generated(g))
            }
            Outcome::Deleted(entry) => write!(f, "Deleted {}", entry),
            Outcome::Renamed { from, to } => write!(f, "Renamed {} to {}", from, to),
            Outcome::Unchanged(entry) => write!(f, "Nothing to do, {} is unchanged", entry),
            Outcome::Listed(lines) if lines.is_empty() => write!(f, "No entries found."),
            Outcome::Listed(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

/// Run one workflow and return its outcome
pub fn run_command(ctx: &Context<'_>, cmd: Commands) -> PaResult<Outcome> {
    match cmd {
        Commands::Add {
            site,
            account,
            generate,
        } => add::run(ctx, site, account, generate),
        Commands::Show { site, account } => show::run(ctx, site, account),
        Commands::Edit {
            site,
            account,
            generate,
        } => edit::run(ctx, site, account, generate),
        Commands::Delete { site, account } => delete::run(ctx, site, account),
        Commands::Rename {
            site,
            account,
            new_site,
            new_account,
        } => rename::run(ctx, site, account, new_site, new_account),
        Commands::List => list::run(ctx),
    }
}

/// Run one workflow and print its status line
///
/// A declined confirmation or cancelled selection prints `Aborted.` and is
/// not an error.
pub fn handle_command(ctx: &Context<'_>, cmd: Commands) -> PaResult<()> {
    match run_command(ctx, cmd) {
        Ok(outcome) => {
            println!("{}", outcome);
            Ok(())
        }
        Err(e) if e.is_aborted() => {
            println!("Aborted.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
