use blackbook::api::BlackbookApi;
use blackbook::collection::Collection;
use blackbook::error::{BlackbookError, Result};
use blackbook::record::Record;
use blackbook::store::fs::FileStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands, NoteCommands, PhoneCommands};
use cli::print::{
    print_birthdays, print_info, print_note, print_notes, print_record, print_records,
    print_success,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(resolve_data_file(cli.file.clone()));
    let mut api = BlackbookApi::open(store)?;

    match cli.command {
        Commands::Add { name } => {
            api.add_contact(&name)?;
            print_success(&format!("Contact '{}' added.", name));
        }
        Commands::Remove { name } => {
            api.remove_contact(&name)?;
            print_success(&format!("Contact '{}' removed.", name));
        }
        Commands::Rename { old, new } => {
            api.rename_contact(&old, &new)?;
            print_success(&format!("Contact '{}' renamed to '{}'.", old, new));
        }
        Commands::Phone { command } => handle_phone(&mut api, command)?,
        Commands::Email { name, email } => {
            api.set_email(&name, &email)?;
            print_success(&format!("Email set for '{}'.", name));
        }
        Commands::Address { name, address } => {
            api.set_address(&name, &address)?;
            print_success(&format!("Address set for '{}'.", name));
        }
        Commands::Birthday { name, date } => {
            api.set_birthday(&name, &date)?;
            print_success(&format!("Birthday set for '{}'.", name));
        }
        Commands::Tag { name, tags } => {
            api.tag_contact(&name, &tags)?;
            print_success(&format!("Tags added to '{}'.", name));
        }
        Commands::Untag { name, tags } => {
            api.untag_contact(&name, &tags)?;
            print_success(&format!("Tags removed from '{}'.", name));
        }
        Commands::Show { name } => {
            print_record(api.get_contact(&name)?);
        }
        Commands::List => {
            let records: Vec<Record> = api
                .contacts()
                .get_all()
                .into_iter()
                .cloned()
                .collect();
            print_records(&records);
        }
        Commands::Search {
            query,
            tag,
            sort,
            order,
        } => {
            let found = api.search_contacts(&query, &tag, &sort, order.parse()?)?;
            print_records(&found);
        }
        Commands::Birthdays { on } => {
            let reference = parse_reference(on)?;
            print_birthdays(&api.upcoming_birthdays(reference));
        }
        Commands::Note { command } => handle_note(&mut api, command)?,
    }

    Ok(())
}

fn handle_phone(api: &mut BlackbookApi<FileStore>, command: PhoneCommands) -> Result<()> {
    match command {
        PhoneCommands::Add { name, number } => {
            api.add_phone(&name, &number)?;
            print_success(&format!("Phone added to '{}'.", name));
        }
        PhoneCommands::Edit { name, old, new } => {
            api.edit_phone(&name, &old, &new)?;
            print_success(&format!("Phone updated for '{}'.", name));
        }
        PhoneCommands::Remove { name, number } => {
            api.remove_phone(&name, &number)?;
            print_success(&format!("Phone removed from '{}'.", name));
        }
    }
    Ok(())
}

fn handle_note(api: &mut BlackbookApi<FileStore>, command: NoteCommands) -> Result<()> {
    match command {
        NoteCommands::Add { title, content } => {
            api.add_note(&title, &content)?;
            print_success(&format!("Note '{}' added.", title));
        }
        NoteCommands::Edit { title, content } => {
            api.edit_note(&title, &content)?;
            print_success(&format!("Note '{}' updated.", title));
        }
        NoteCommands::Remove { title } => {
            if api.remove_note(&title)? {
                print_success(&format!("Note '{}' removed.", title));
            } else {
                print_info(&format!("Note '{}' is not found.", title));
            }
        }
        NoteCommands::Show { title } => {
            print_note(api.get_note(&title)?);
        }
        NoteCommands::List => {
            let notes: Vec<blackbook::note::Note> = api
                .notes()
                .get_all()
                .into_iter()
                .cloned()
                .collect();
            print_notes(&notes);
        }
        NoteCommands::Search {
            query,
            tag,
            sort,
            order,
        } => {
            let found = api.search_notes(&query, &tag, &sort, order.parse()?)?;
            print_notes(&found);
        }
        NoteCommands::Tag { title, tags } => {
            api.tag_note(&title, &tags)?;
            print_success(&format!("Tags added to '{}'.", title));
        }
        NoteCommands::Untag { title, tags } => {
            api.untag_note(&title, &tags)?;
            print_success(&format!("Tags removed from '{}'.", title));
        }
    }
    Ok(())
}

fn resolve_data_file(overridden: Option<PathBuf>) -> PathBuf {
    if let Some(path) = overridden {
        return path;
    }
    let dirs = ProjectDirs::from("com", "blackbook", "blackbook")
        .expect("Could not determine data dir");
    dirs.data_dir().join("data.json")
}

fn parse_reference(on: Option<String>) -> Result<NaiveDate> {
    match on {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%d.%m.%Y").map_err(|_| {
            BlackbookError::Validation("Invalid date format. Use DD.MM.YYYY".to_string())
        }),
        None => Ok(Local::now().date_naive()),
    }
}
