use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blackbook")]
#[command(about = "Personal address book and notes for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the data file (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        name: String,
    },

    /// Remove a contact
    #[command(alias = "rm")]
    Remove {
        name: String,
    },

    /// Rename a contact
    Rename {
        old: String,
        new: String,
    },

    /// Manage a contact's phone numbers
    Phone {
        #[command(subcommand)]
        command: PhoneCommands,
    },

    /// Set a contact's email address
    Email {
        name: String,
        email: String,
    },

    /// Set a contact's postal address
    Address {
        name: String,
        address: String,
    },

    /// Set a contact's birthday (DD.MM.YYYY)
    Birthday {
        name: String,
        date: String,
    },

    /// Attach tags to a contact
    Tag {
        name: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from a contact
    Untag {
        name: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Show a single contact
    Show {
        name: String,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Search contacts
    Search {
        /// Substring to look for, matched against any field
        #[arg(default_value = "")]
        query: String,

        /// Only include contacts carrying this tag
        #[arg(short, long, default_value = "")]
        tag: String,

        /// Field to sort by (name, email, address, birthday)
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Sort order
        #[arg(short, long, default_value = "asc", value_parser = ["asc", "desc"])]
        order: String,
    },

    /// Show birthdays in the coming week
    Birthdays {
        /// Reference date (DD.MM.YYYY, defaults to today)
        #[arg(long)]
        on: Option<String>,
    },

    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone number (10 digits)
    Add { name: String, number: String },

    /// Replace a phone number
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number (all occurrences)
    #[command(alias = "rm")]
    Remove { name: String, number: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a new note
    Add {
        title: String,
        #[arg(default_value = "")]
        content: String,
    },

    /// Replace a note's content
    Edit { title: String, content: String },

    /// Remove a note
    #[command(alias = "rm")]
    Remove { title: String },

    /// Show a single note
    Show { title: String },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Search notes
    Search {
        /// Substring to look for in titles and content
        #[arg(default_value = "")]
        query: String,

        /// Only include notes carrying this tag
        #[arg(short, long, default_value = "")]
        tag: String,

        /// Field to sort by (title, content)
        #[arg(short, long, default_value = "title")]
        sort: String,

        /// Sort order
        #[arg(short, long, default_value = "asc", value_parser = ["asc", "desc"])]
        order: String,
    },

    /// Attach tags to a note
    Tag {
        title: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from a note
    Untag {
        title: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
}
