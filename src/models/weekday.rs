use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week used by weekly recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeekdayName {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekdayName {
    pub const ALL: [WeekdayName; 7] = [
        WeekdayName::Sunday,
        WeekdayName::Monday,
        WeekdayName::Tuesday,
        WeekdayName::Wednesday,
        WeekdayName::Thursday,
        WeekdayName::Friday,
        WeekdayName::Saturday,
    ];

    /// Sunday = 0 .. Saturday = 6, same numbering as
    /// `chrono::Weekday::num_days_from_sunday`.
    pub fn ordinal(&self) -> u32 {
        match self {
            WeekdayName::Sunday => 0,
            WeekdayName::Monday => 1,
            WeekdayName::Tuesday => 2,
            WeekdayName::Wednesday => 3,
            WeekdayName::Thursday => 4,
            WeekdayName::Friday => 5,
            WeekdayName::Saturday => 6,
        }
    }

    pub fn es_name(&self) -> &'static str {
        match self {
            WeekdayName::Sunday => "domingo",
            WeekdayName::Monday => "lunes",
            WeekdayName::Tuesday => "martes",
            WeekdayName::Wednesday => "miércoles",
            WeekdayName::Thursday => "jueves",
            WeekdayName::Friday => "viernes",
            WeekdayName::Saturday => "sábado",
        }
    }

    pub fn from_chrono(wd: chrono::Weekday) -> Self {
        Self::ALL[wd.num_days_from_sunday() as usize]
    }
}

/// Lowercase and strip the Spanish accents so "Miércoles", "miercoles"
/// and "MIERCOLES" all compare equal.
pub(crate) fn fold_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

impl FromStr for WeekdayName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_name(s).as_str() {
            "domingo" | "sunday" | "sun" => Ok(WeekdayName::Sunday),
            "lunes" | "monday" | "mon" => Ok(WeekdayName::Monday),
            "martes" | "tuesday" | "tue" => Ok(WeekdayName::Tuesday),
            "miercoles" | "wednesday" | "wed" => Ok(WeekdayName::Wednesday),
            "jueves" | "thursday" | "thu" => Ok(WeekdayName::Thursday),
            "viernes" | "friday" | "fri" => Ok(WeekdayName::Friday),
            "sabado" | "saturday" | "sat" => Ok(WeekdayName::Saturday),
            _ => Err(AppError::InvalidWeekday(s.to_string())),
        }
    }
}

impl TryFrom<String> for WeekdayName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekdayName> for String {
    fn from(value: WeekdayName) -> Self {
        value.es_name().to_string()
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.es_name())
    }
}
