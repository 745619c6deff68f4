//! Record model: one contact's name, phones and birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use crate::models::summary::{BirthdayCountdown, ContactSummary, PHONE_SEPARATOR};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact in the address book.
///
/// Phones keep insertion order. Duplicate canonical phones are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a record with a name and an optional first phone.
    pub fn new(name: ContactName, phone: Option<PhoneNumber>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday: None,
        }
    }

    /// Create a record from raw strings, validating both name and phone.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or the phone does not validate.
    pub fn try_new(name: &str, phone: Option<&str>) -> RecordResult<Self> {
        let name = ContactName::new(name)?;
        let phone = phone.map(PhoneNumber::new).transpose()?;
        Ok(Self::new(name, phone))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> RecordResult<&PhoneNumber> {
        let phone = PhoneNumber::new(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// The old entry is removed and the new one appended at the end.
    /// Returns the removed phone.
    ///
    /// # Errors
    ///
    /// Fails if either number does not validate, or with
    /// `RecordError::PhoneNotFound` if `old_raw` is not in the record. The
    /// phone list is untouched on any error.
    pub fn change_phone(&mut self, old_raw: &str, new_raw: &str) -> RecordResult<PhoneNumber> {
        let old = PhoneNumber::new(old_raw)?;
        let new = PhoneNumber::new(new_raw)?;

        let index = self
            .phones
            .iter()
            .position(|phone| *phone == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let removed = self.phones.remove(index);
        tracing::debug!(name = %self.name, old = %removed, new = %new, "Phone changed");
        self.phones.push(new);
        Ok(removed)
    }

    /// Remove every phone equal to `raw`, returning how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> RecordResult<usize> {
        let target = PhoneNumber::new(raw)?;
        let before = self.phones.len();
        self.phones.retain(|phone| *phone != target);
        let removed = before - self.phones.len();

        if removed > 0 {
            tracing::debug!(name = %self.name, phone = %target, removed, "Phone removed");
        }
        Ok(removed)
    }

    /// Whether the record holds a phone equal to `raw`.
    pub fn has_phone(&self, raw: &str) -> RecordResult<bool> {
        let target = PhoneNumber::new(raw)?;
        Ok(self.phones.contains(&target))
    }

    /// Set the birthday, overwriting any previous one. Returns the previous value.
    pub fn add_birthday(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> RecordResult<Option<BirthdayDate>> {
        let birthday = BirthdayDate::new(year, month, day)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Birthday set");
        Ok(self.birthday.replace(birthday))
    }

    pub fn remove_birthday(&mut self) -> Option<BirthdayDate> {
        self.birthday.take()
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> RecordResult<BirthdayCountdown> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// A birthday falling on `today` counts as `ThisYear(0)`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoBirthday` if no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> RecordResult<BirthdayCountdown> {
        let birthday = self
            .birthday
            .ok_or_else(|| RecordError::NoBirthday(self.name.to_string()))?;

        let this_year = Self::occurrence(birthday, today.year())?;
        if today <= this_year {
            return Ok(BirthdayCountdown::ThisYear(Self::days_between(today, this_year)));
        }

        let next_year = Self::occurrence(birthday, today.year() + 1)?;
        Ok(BirthdayCountdown::NextYear(Self::days_between(today, next_year)))
    }

    /// Read-only snapshot of the record.
    pub fn summary(&self) -> ContactSummary {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR);

        ContactSummary {
            name: self.name.to_string(),
            phones,
            birthday: self.birthday.map(|b| b.to_string()),
        }
    }

    fn occurrence(birthday: BirthdayDate, year: i32) -> RecordResult<NaiveDate> {
        birthday.occurrence_in(year).ok_or_else(|| {
            ValidationError::InvalidDate {
                year,
                month: birthday.month(),
                day: birthday.day(),
            }
            .into()
        })
    }

    // Callers guarantee `to >= from` and a gap of at most one year.
    fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
        (to - from).num_days() as u32
    }
}
