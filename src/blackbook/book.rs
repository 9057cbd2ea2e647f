//! # AddressBook
//!
//! A name-keyed, insertion-ordered collection of [`Record`]s. The key is the
//! record's own name field, so the two can never disagree: renaming goes
//! through [`AddressBook::change_name`], which validates the new name and
//! updates the record in place as one atomic step.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Collection;
use crate::error::{BlackbookError, Result};
use crate::record::Record;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Insert a record under its name. Names are unique keys.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.find(record.name().value()).is_some() {
            return Err(BlackbookError::DuplicateKey(format!(
                "contact '{}'",
                record.name().value()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// Exact-key lookup. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().value() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().value() == name)
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.name().value() == name)
            .ok_or_else(|| BlackbookError::NotFound(format!("contact '{}'", name)))?;
        self.records.remove(position);
        Ok(())
    }

    /// Move the record from key `old` to key `new`, keeping the same record
    /// instance. The new name is validated before anything changes, so the
    /// book is never left with a key that disagrees with the record's name.
    pub fn change_name(&mut self, old: &str, new: &str) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.name().value() == old)
            .ok_or_else(|| BlackbookError::NotFound(format!("contact '{}'", old)))?;
        if new != old && self.find(new).is_some() {
            return Err(BlackbookError::DuplicateKey(format!("contact '{}'", new)));
        }
        self.records[position].change_name(new)
    }

    /// Contacts whose birthday falls within the week starting at `reference`
    /// (inclusive on both ends). A birthday that already passed this year
    /// counts for next year. Occurrences landing on a weekend shift the
    /// congratulation date to the following Monday. The result is sorted by
    /// congratulation date; ties keep insertion order.
    ///
    /// The reference date is injected so the computation stays deterministic
    /// under test.
    pub fn get_upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let mut occurrence = occurrence_in_year(birthday.date(), reference.year());
            if occurrence < reference {
                occurrence = occurrence_in_year(birthday.date(), reference.year() + 1);
            }
            let days_until = (occurrence - reference).num_days();
            if !(0..=7).contains(&days_until) {
                continue;
            }
            let congratulation = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };
            upcoming.push(UpcomingBirthday {
                name: record.name().value().to_string(),
                date: congratulation,
            });
        }
        upcoming.sort_by_key(|entry| entry.date);
        upcoming
    }
}

impl Collection for AddressBook {
    type Item = Record;

    fn get_all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }
}

/// One upcoming congratulation: who and on which (possibly weekend-shifted)
/// date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%d.%m.%Y"))
    }
}

fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        // Feb 29 has no occurrence in a common year; celebrate on Mar 1
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("month and day taken from a parsed date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::SortOrder;
    use crate::entity::Entity;

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add(Record::new(name).unwrap()).unwrap();
        }
        book
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_rejects_duplicate_name_and_keeps_original() {
        let mut book = AddressBook::new();
        let mut first = Record::new("Alice").unwrap();
        first.add_phone("0123456789").unwrap();
        book.add(first).unwrap();

        let err = book.add(Record::new("Alice").unwrap()).unwrap_err();
        assert!(matches!(err, BlackbookError::DuplicateKey(_)));
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn find_absent_returns_none() {
        let book = AddressBook::new();
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn delete_absent_fails() {
        let mut book = AddressBook::new();
        let err = book.delete("Alice").unwrap_err();
        assert!(matches!(err, BlackbookError::NotFound(_)));
    }

    #[test]
    fn change_name_retargets_key_and_preserves_record() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0123456789").unwrap();
        book.add(record).unwrap();

        book.change_name("Alice", "Bob").unwrap();
        assert!(book.find("Alice").is_none());
        let moved = book.find("Bob").unwrap();
        assert_eq!(moved.name().value(), "Bob");
        assert_eq!(moved.phones()[0].value(), "0123456789");
    }

    #[test]
    fn change_name_fails_for_unknown_old_key() {
        let mut book = AddressBook::new();
        let err = book.change_name("Alice", "Bob").unwrap_err();
        assert!(matches!(err, BlackbookError::NotFound(_)));
    }

    #[test]
    fn change_name_refuses_occupied_key() {
        let mut book = book_with(&["Alice", "Bob"]);
        let err = book.change_name("Alice", "Bob").unwrap_err();
        assert!(matches!(err, BlackbookError::DuplicateKey(_)));
        assert!(book.find("Alice").is_some());
    }

    #[test]
    fn search_empty_query_lists_all_sorted_by_name() {
        let book = book_with(&["Carol", "Alice", "Bob"]);
        let found = book.search("", "", "name", SortOrder::Asc).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn search_substring_descending() {
        let book = book_with(&["Alice", "Albert", "Bob"]);
        let found = book.search("al", "", "name", SortOrder::Desc).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Alice", "Albert"]);
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_email("alice@Example.com").unwrap();
        book.add(record).unwrap();
        book.add(Record::new("Bob").unwrap()).unwrap();

        let found = book.search("EXAMPLE", "", "name", SortOrder::Asc).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name().value(), "Alice");
    }

    #[test]
    fn search_filters_by_tag() {
        let mut book = book_with(&["Alice", "Bob"]);
        book.find_mut("Bob").unwrap().add_tags(&["family"]).unwrap();

        let found = book.search("", "family", "name", SortOrder::Asc).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn search_ties_keep_insertion_order() {
        // No record has an email, so every sort key is equal.
        let book = book_with(&["Carol", "Alice", "Bob"]);
        let found = book.search("", "", "email", SortOrder::Asc).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);

        let found = book.search("", "", "email", SortOrder::Desc).unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn search_rejects_unknown_sort_key() {
        let book = AddressBook::new();
        let err = book.search("", "", "phones", SortOrder::Asc).unwrap_err();
        assert!(matches!(err, BlackbookError::InvalidSortKey(_)));
    }

    #[test]
    fn search_does_not_mutate_the_book() {
        let book = book_with(&["Carol", "Alice"]);
        book.search("", "", "name", SortOrder::Asc).unwrap();
        let names: Vec<&str> = book.get_all().iter().map(|r| r.name().value()).collect();
        assert_eq!(names, vec!["Carol", "Alice"]);
    }

    #[test]
    fn birthday_within_week_is_included() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        book.add(record).unwrap();

        // Jan 1 already passed in the reference year, so it counts for next
        // year: three days ahead of Dec 29.
        let upcoming = book.get_upcoming_birthdays(date(2025, 12, 29));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Alice");
        assert_eq!(upcoming[0].date, date(2026, 1, 1));
    }

    #[test]
    fn birthday_beyond_week_is_excluded() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        book.add(record).unwrap();

        assert!(book.get_upcoming_birthdays(date(2025, 12, 22)).is_empty());
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        // June 10 2025 is a Tuesday, no weekend shift involved.
        record.add_birthday("10.06.1990").unwrap();
        book.add(record).unwrap();

        assert_eq!(book.get_upcoming_birthdays(date(2025, 6, 10)).len(), 1);
        assert_eq!(book.get_upcoming_birthdays(date(2025, 6, 3)).len(), 1);
        assert!(book.get_upcoming_birthdays(date(2025, 6, 2)).is_empty());
    }

    #[test]
    fn saturday_birthday_shifts_two_days_to_monday() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        // June 7 2025 is a Saturday.
        record.add_birthday("07.06.1990").unwrap();
        book.add(record).unwrap();

        let upcoming = book.get_upcoming_birthdays(date(2025, 6, 2));
        assert_eq!(upcoming[0].date, date(2025, 6, 9));
    }

    #[test]
    fn sunday_birthday_shifts_one_day_to_monday() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        // June 8 2025 is a Sunday.
        record.add_birthday("08.06.1990").unwrap();
        book.add(record).unwrap();

        let upcoming = book.get_upcoming_birthdays(date(2025, 6, 2));
        assert_eq!(upcoming[0].date, date(2025, 6, 9));
    }

    #[test]
    fn upcoming_birthdays_are_sorted_by_date() {
        let mut book = AddressBook::new();
        let mut later = Record::new("Late").unwrap();
        later.add_birthday("12.06.1990").unwrap();
        book.add(later).unwrap();
        let mut sooner = Record::new("Soon").unwrap();
        sooner.add_birthday("10.06.1990").unwrap();
        book.add(sooner).unwrap();

        let upcoming = book.get_upcoming_birthdays(date(2025, 6, 9));
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Soon", "Late"]);
    }

    #[test]
    fn upcoming_birthday_renders_shifted_date() {
        let entry = UpcomingBirthday {
            name: "Alice".to_string(),
            date: date(2025, 6, 9),
        };
        assert_eq!(entry.to_string(), "Alice: 09.06.2025");
    }

    #[test]
    fn leap_day_birthday_falls_back_to_march_first() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("29.02.1992").unwrap();
        book.add(record).unwrap();

        // 2025 is a common year; Mar 1 2025 is a Saturday, shifted to Mar 3.
        let upcoming = book.get_upcoming_birthdays(date(2025, 2, 24));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date(2025, 3, 3));
    }
}
