//! Utilitaires horaires : heure du jour en minutes, jour de semaine, semaines ISO.

use crate::rotation::RotationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes écoulées depuis minuit, dans `0..=1440`.
///
/// `"24:00"` est accepté pour représenter la fin de journée.
/// (Dé)sérialisé sous la forme `"HH:MM"` : une valeur mal formée est rejetée au chargement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftTime(u16);

impl ShiftTime {
    pub const END_OF_DAY: ShiftTime = ShiftTime(24 * 60);

    /// Parse `H:MM` ou `HH:MM`.
    pub fn parse(raw: &str) -> Result<Self, RotationError> {
        let invalid = || RotationError::InvalidTime(raw.to_string());
        let (h, m) = raw.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: u16 = h.parse().map_err(|_| invalid())?;
        let minutes: u16 = m.parse().map_err(|_| invalid())?;
        match (hours, minutes) {
            (24, 0) => Ok(Self::END_OF_DAY),
            (0..=23, 0..=59) => Ok(Self(hours * 60 + minutes)),
            _ => Err(invalid()),
        }
    }

    /// Début de l'heure `hour` (0..=24).
    pub fn from_hour(hour: u8) -> Self {
        Self(u16::from(hour.min(24)) * 60)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for ShiftTime {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShiftTime {
    type Error = RotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShiftTime> for String {
    fn from(value: ShiftTime) -> Self {
        value.to_string()
    }
}

/// Affichage 12h (`7:00 AM`, `12:00 PM`, `10:00 PM`).
pub fn format_12h(time: ShiftTime) -> String {
    let hour = time.hour() % 24;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display}:{:02} {suffix}", time.minute())
}

/// Parse une date ISO `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, RotationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| RotationError::InvalidDate(raw.to_string()))
}

/// Jour de semaine servant de clé dans le planning hebdomadaire.
pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Lundi de la semaine contenant `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Les 7 dates (lundi → dimanche) de la semaine commençant à `monday`.
pub fn week_dates(monday: NaiveDate) -> [NaiveDate; 7] {
    let mut out = [monday; 7];
    for (offset, slot) in (0i64..).zip(out.iter_mut()) {
        *slot = monday + Duration::days(offset);
    }
    out
}

/// Parse un nom de jour (`monday`, `mon`, `lundi`...).
pub fn parse_weekday(raw: &str) -> Option<Weekday> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" | "lundi" => Some(Weekday::Mon),
        "tuesday" | "tue" | "mardi" => Some(Weekday::Tue),
        "wednesday" | "wed" | "mercredi" => Some(Weekday::Wed),
        "thursday" | "thu" | "jeudi" => Some(Weekday::Thu),
        "friday" | "fri" | "vendredi" => Some(Weekday::Fri),
        "saturday" | "sat" | "samedi" => Some(Weekday::Sat),
        "sunday" | "sun" | "dimanche" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
