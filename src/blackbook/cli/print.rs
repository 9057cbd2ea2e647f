use blackbook::book::UpcomingBirthday;
use blackbook::entity::Entity;
use blackbook::field::{Phone, Tag};
use blackbook::note::Note;
use blackbook::record::Record;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn print_record(record: &Record) {
    println!("{}", record);
}

pub fn print_note(note: &Note) {
    println!("{}", note);
}

/// One line per contact: padded name, phones, then whatever else is set.
pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.name().value().width())
        .max()
        .unwrap_or(0);

    for record in records {
        let name = record.name().value();
        let padding = " ".repeat(name_width.saturating_sub(name.width()));
        let phones = record
            .phones()
            .iter()
            .map(Phone::value)
            .collect::<Vec<&str>>()
            .join("; ");

        let mut extras: Vec<String> = Vec::new();
        if let Some(email) = record.email() {
            extras.push(email.value().to_string());
        }
        if let Some(birthday) = record.birthday() {
            extras.push(birthday.value().to_string());
        }

        println!(
            "{}{}  {}  {}{}",
            name.bold(),
            padding,
            if phones.is_empty() { "-".to_string() } else { phones },
            extras.join("  ").dimmed(),
            format_tags(record.tags())
        );
    }
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let title_width = notes
        .iter()
        .map(|n| n.title().value().width())
        .max()
        .unwrap_or(0);

    for note in notes {
        let title = note.title().value();
        let padding = " ".repeat(title_width.saturating_sub(title.width()));
        let preview: String = note
            .content()
            .value()
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        println!(
            "{}{}  {}{}",
            title.bold(),
            padding,
            preview.dimmed(),
            format_tags(note.tags())
        );
    }
}

pub fn print_birthdays(upcoming: &[UpcomingBirthday]) {
    if upcoming.is_empty() {
        println!("No birthdays in the coming week.");
        return;
    }
    for entry in upcoming {
        println!("{}", entry);
    }
}

fn format_tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let joined = tags
        .iter()
        .map(|t| format!("#{}", t.value()))
        .collect::<Vec<String>>()
        .join(" ");
    format!("  {}", joined.yellow())
}
