use std::ops::RangeInclusive;
use thiserror::Error;

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOptions {
    /// Première heure couverte (incluse).
    pub first_hour: u8,
    /// Dernière heure couverte (incluse) : le créneau se termine à `last_hour + 1`.
    pub last_hour: u8,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            first_hour: 7,
            last_hour: 22,
        }
    }
}

impl RotationOptions {
    pub fn validate(&self) -> Result<(), RotationError> {
        if self.first_hour > self.last_hour || self.last_hour > 23 {
            return Err(RotationError::InvalidHourRange {
                first: self.first_hour,
                last: self.last_hour,
            });
        }
        Ok(())
    }

    pub fn hours(&self) -> RangeInclusive<u8> {
        self.first_hour..=self.last_hour
    }
}

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),
    #[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid hour range: {first}..={last} (hours must be ordered and <= 23)")]
    InvalidHourRange { first: u8, last: u8 },
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("person already exists: {0}")]
    DuplicatePerson(String),
}
