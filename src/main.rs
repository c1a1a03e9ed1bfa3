//! Rolodex - Main Entry Point
//!
//! A thin CLI over the `rolodex` library: each subcommand builds one
//! already-validated [`Command`] and prints the feedback it returns.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rolodex::{AppHandler, Command};

/// Rolodex - contact and event management from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the address book data file
    file: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Add a person to the address book
    AddPerson {
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Tags to attach (alphanumeric, repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a person by name
    DeletePerson { name: String },
    /// Schedule an event on a date (YYYY-MM-DD)
    AddEvent { name: String, date: String },
    /// Delete an event by name
    DeleteEvent { name: String },
    /// Attach a reminder message to an event
    AddReminder { event: String, message: String },
    /// Remove a tag from the book and from every tagged person
    RemoveTag { tag: String },
    /// Set a display color for a tag (any CSS color syntax)
    SetTagColor { tag: String, color: String },
    /// List persons whose name contains a keyword
    FindPersons { keyword: String },
    /// List persons, optionally only those carrying a tag
    ListPersons {
        #[arg(long)]
        tag: Option<String>,
    },
    /// List events, optionally only those on or before a date
    ListEvents {
        #[arg(long)]
        on_or_before: Option<String>,
    },
}

impl From<CliCommand> for Command {
    fn from(cli: CliCommand) -> Self {
        match cli {
            CliCommand::AddPerson {
                name,
                phone,
                email,
                address,
                tags,
            } => Command::AddPerson {
                name,
                phone,
                email,
                address,
                tags,
            },
            CliCommand::DeletePerson { name } => Command::DeletePerson { name },
            CliCommand::AddEvent { name, date } => Command::AddEvent { name, date },
            CliCommand::DeleteEvent { name } => Command::DeleteEvent { name },
            CliCommand::AddReminder { event, message } => Command::AddReminder { event, message },
            CliCommand::RemoveTag { tag } => Command::RemoveTag { tag },
            CliCommand::SetTagColor { tag, color } => Command::SetTagColor { tag, color },
            CliCommand::FindPersons { keyword } => Command::FindPersons { keyword },
            CliCommand::ListPersons { tag } => Command::ListPersons { tag },
            CliCommand::ListEvents { on_or_before } => Command::ListEvents { on_or_before },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut handler = AppHandler::new(&args.file)?;
    let result = Command::from(args.command).execute(&mut handler)?;
    println!("{}", result.feedback);
    Ok(())
}
