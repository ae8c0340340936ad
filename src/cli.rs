//! Command-line front end

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::app::{App, Notice};
use crate::config::Config;
use crate::data::ContactDraft;

#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "Keep a local contact book")]
pub struct Cli {
    /// Data directory (defaults to ~/.contactbook)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Database file, overriding the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Log debug output to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List contacts, newest first
    List {
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a contact
    Add {
        name: String,
        phone: String,
        email: String,
    },
    /// Change fields of a contact; omitted fields keep their value
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete { id: i64 },
    /// Write all contacts to a CSV file
    Export {
        /// Destination (defaults to the configured export file)
        path: Option<PathBuf>,
    },
    /// Add contacts from a CSV file
    Import { path: PathBuf },
}

/// Run one command against `app`, writing output to `out`.
///
/// Returns `false` when the command ended with an error notice.
pub async fn execute<W: Write>(
    command: Command,
    app: &mut App,
    config: &Config,
    out: &mut W,
) -> Result<bool> {
    let notice = match command {
        Command::List { json } => {
            app.refresh().await?;
            print_listing(app, json, out)?;
            return Ok(true);
        }
        Command::Add { name, phone, email } => {
            app.add_contact(ContactDraft::new(name, phone, email)).await?
        }
        Command::Edit {
            id,
            name,
            phone,
            email,
        } => {
            app.refresh().await?;
            match app.draft_for(id) {
                Some(mut draft) => {
                    if let Some(name) = name {
                        draft.name = name;
                    }
                    if let Some(phone) = phone {
                        draft.phone = phone;
                    }
                    if let Some(email) = email {
                        draft.email = email;
                    }
                    app.edit_contact(id, draft).await?
                }
                None => Notice::not_found(id),
            }
        }
        Command::Delete { id } => app.delete_contact(id).await?,
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.export_file));
            app.export_to(path).await
        }
        Command::Import { path } => app.import_from(path).await?,
    };

    writeln!(out, "{notice}").context("Failed to write output")?;
    Ok(!notice.is_error())
}

fn print_listing<W: Write>(app: &App, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, app.contacts())
            .context("Failed to encode contacts")?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(message) = app.empty_state_message() {
        writeln!(out, "{message}")?;
        return Ok(());
    }

    for contact in app.contacts() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            contact.id, contact.name, contact.phone, contact.email
        )?;
    }
    Ok(())
}
