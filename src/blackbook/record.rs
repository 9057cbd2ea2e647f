//! One contact's complete field set and its mutation operations.
//!
//! Every mutator validates before it assigns, so a rejected value never
//! disturbs what was already stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Searchable;
use crate::entity::Entity;
use crate::error::{BlackbookError, Result};
use crate::field::{Address, Birthday, Email, Name, Phone, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    email: Option<Email>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
            tags: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append. Phones are an ordered sequence and duplicates by
    /// value may coexist.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove every phone whose value equals `number`. Nothing to remove is
    /// not an error.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone.value() != number);
    }

    /// Replace the first phone equal to `old` with the validated `new` value.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.value() == old)
            .ok_or_else(|| BlackbookError::NotFound(format!("phone '{}'", old)))?;
        self.phones[position] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == number)
    }

    /// Validate-then-overwrite. A rejected value leaves the previous
    /// birthday untouched.
    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn add_email(&mut self, value: &str) -> Result<()> {
        self.email = Some(Email::new(value)?);
        Ok(())
    }

    pub fn edit_email(&mut self, value: &str) -> Result<()> {
        self.add_email(value)
    }

    pub fn add_address(&mut self, value: &str) -> Result<()> {
        self.address = Some(Address::new(value)?);
        Ok(())
    }

    pub fn edit_address(&mut self, value: &str) -> Result<()> {
        self.add_address(value)
    }

    /// Replace the record's own name field. Inside an address book the name
    /// is also the key, so use [`crate::book::AddressBook::change_name`],
    /// which performs this update and the rekey as one step.
    pub fn change_name(&mut self, new_name: &str) -> Result<()> {
        self.name = Name::new(new_name)?;
        Ok(())
    }
}

impl Entity for Record {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.tags
    }
}

impl Searchable for Record {
    const SORT_KEYS: &'static [&'static str] = &["name", "email", "address", "birthday"];

    fn match_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.value()];
        fields.extend(self.phones.iter().map(Phone::value));
        if let Some(email) = &self.email {
            fields.push(email.value());
        }
        if let Some(address) = &self.address {
            fields.push(address.value());
        }
        if let Some(birthday) = &self.birthday {
            fields.push(birthday.value());
        }
        fields
    }

    fn sort_field(&self, key: &str) -> &str {
        match key {
            "name" => self.name.value(),
            "email" => self.email.as_ref().map(Email::value).unwrap_or(""),
            "address" => self.address.as_ref().map(Address::value).unwrap_or(""),
            "birthday" => self.birthday.as_ref().map(Birthday::value).unwrap_or(""),
            _ => "",
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "n/a".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::value)
                .collect::<Vec<&str>>()
                .join("; ")
        };
        let tags = if self.tags.is_empty() {
            "n/a".to_string()
        } else {
            self.tags
                .iter()
                .map(Tag::value)
                .collect::<Vec<&str>>()
                .join("; ")
        };
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phones: {}", phones)?;
        writeln!(
            f,
            "Email: {}",
            self.email.as_ref().map(Email::value).unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Address: {}",
            self.address.as_ref().map(Address::value).unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Birthday: {}",
            self.birthday.as_ref().map(Birthday::value).unwrap_or("n/a")
        )?;
        write!(f, "Tags: {}", tags)
    }
}
