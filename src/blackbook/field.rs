//! # Validated Fields
//!
//! Every scalar a contact or note carries is wrapped in its own field type.
//! A field is validated once, at construction, and can never hold an invalid
//! value afterwards. Constructors return `Err(BlackbookError::Validation)`
//! with a human-readable reason; they have no side effects.
//!
//! All field types serialize as plain strings. Deserialization goes through
//! the same constructors (`serde(try_from = "String")`), so data loaded from
//! disk is re-validated and a hand-edited store file cannot smuggle an
//! invalid value into memory.
//!
//! Equality is by wrapped value, never by identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BlackbookError, Result};

/// A contact's name. Non-empty after trimming; the uniqueness key inside an
/// address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(BlackbookError::Validation(
                "The name should not be empty.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A phone number: exactly 10 characters, all digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        if value.chars().count() != 10 {
            return Err(BlackbookError::Validation(
                "The phone number should have 10 digits only.".to_string(),
            ));
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(BlackbookError::Validation(
                "The phone number should have only numbers.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An email address with a minimal `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    pub fn new(value: &str) -> Result<Self> {
        if !is_valid_email(value) {
            return Err(BlackbookError::Validation(
                "Invalid email address format.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// A postal address. Anything non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
}

impl Address {
    pub fn new(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(BlackbookError::Validation(
                "Invalid address format.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A birthday in `DD.MM.YYYY` form. Keeps the original string for display
/// and matching, plus the parsed calendar date for the upcoming-birthday
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, "%d.%m.%Y").map_err(|_| {
            BlackbookError::Validation("Invalid date format. Use DD.MM.YYYY".to_string())
        })?;
        Ok(Self {
            value: value.to_string(),
            date,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A short categorization label, 3 to 10 characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    value: String,
}

impl Tag {
    pub fn new(value: &str) -> Result<Self> {
        let length = value.chars().count();
        if !(3..=10).contains(&length) {
            return Err(BlackbookError::Validation(
                "The tag should be between 3 and 10 characters long.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A note title. Non-empty, at most 100 characters. Immutable once the note
/// is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title {
    value: String,
}

impl Title {
    pub fn new(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(BlackbookError::Validation(
                "The note title should not be empty.".to_string(),
            ));
        }
        if value.chars().count() > 100 {
            return Err(BlackbookError::Validation(
                "The note title should not be longer than 100 characters.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A note body. May be empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Content {
    value: String,
}

impl Content {
    pub fn new(value: &str) -> Result<Self> {
        if value.chars().count() > 200 {
            return Err(BlackbookError::Validation(
                "The note content should not be longer than 200 characters.".to_string(),
            ));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

macro_rules! string_field {
    ($($field:ty),+ $(,)?) => {
        $(
            impl TryFrom<String> for $field {
                type Error = BlackbookError;

                fn try_from(value: String) -> Result<Self> {
                    Self::new(&value)
                }
            }

            impl From<$field> for String {
                fn from(field: $field) -> String {
                    field.value
                }
            }

            impl fmt::Display for $field {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.value)
                }
            }
        )+
    };
}

string_field!(Name, Phone, Email, Address, Birthday, Tag, Title, Content);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0123456789").unwrap();
        assert_eq!(phone.value(), "0123456789");
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(Phone::new("12345o6789").is_err());
        assert!(Phone::new("12345-6789").is_err());
    }

    #[test]
    fn tag_length_bounds_are_inclusive() {
        assert!(Tag::new("ab").is_err());
        assert!(Tag::new("abc").is_ok());
        assert!(Tag::new("abcdefghij").is_ok());
        assert!(Tag::new("abcdefghijk").is_err());
    }

    #[test]
    fn name_rejects_whitespace_only() {
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
        assert!(Name::new("Alice").is_ok());
    }

    #[test]
    fn email_requires_local_at_domain_tld() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("a@b.c").is_ok());
        assert!(Email::new("alice").is_err());
        assert!(Email::new("alice@example").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("alice@.com").is_err());
        assert!(Email::new("alice@ex@ample.com").is_err());
    }

    #[test]
    fn birthday_parses_and_keeps_raw_value() {
        let birthday = Birthday::new("01.01.1990").unwrap();
        assert_eq!(birthday.value(), "01.01.1990");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn birthday_rejects_other_formats() {
        assert!(Birthday::new("1990-01-01").is_err());
        assert!(Birthday::new("32.01.1990").is_err());
        assert!(Birthday::new("first of may").is_err());
    }

    #[test]
    fn title_and_content_length_limits() {
        assert!(Title::new(&"a".repeat(100)).is_ok());
        assert!(Title::new(&"a".repeat(101)).is_err());
        assert!(Title::new("").is_err());
        assert!(Content::new("").is_ok());
        assert!(Content::new(&"a".repeat(200)).is_ok());
        assert!(Content::new(&"a".repeat(201)).is_err());
    }

    #[test]
    fn fields_deserialize_through_validation() {
        let phone: Phone = serde_json::from_str("\"0123456789\"").unwrap();
        assert_eq!(phone.value(), "0123456789");
        assert!(serde_json::from_str::<Phone>("\"not-a-phone\"").is_err());
    }
}
