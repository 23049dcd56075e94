use crate::errors::AppError;
use crate::models::weekday::fold_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month used by yearly recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub const ALL: [MonthName; 12] = [
        MonthName::January,
        MonthName::February,
        MonthName::March,
        MonthName::April,
        MonthName::May,
        MonthName::June,
        MonthName::July,
        MonthName::August,
        MonthName::September,
        MonthName::October,
        MonthName::November,
        MonthName::December,
    ];

    /// January = 1 .. December = 12 (chrono's month numbering).
    pub fn number(&self) -> u32 {
        match self {
            MonthName::January => 1,
            MonthName::February => 2,
            MonthName::March => 3,
            MonthName::April => 4,
            MonthName::May => 5,
            MonthName::June => 6,
            MonthName::July => 7,
            MonthName::August => 8,
            MonthName::September => 9,
            MonthName::October => 10,
            MonthName::November => 11,
            MonthName::December => 12,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    pub fn es_name(&self) -> &'static str {
        match self {
            MonthName::January => "enero",
            MonthName::February => "febrero",
            MonthName::March => "marzo",
            MonthName::April => "abril",
            MonthName::May => "mayo",
            MonthName::June => "junio",
            MonthName::July => "julio",
            MonthName::August => "agosto",
            MonthName::September => "septiembre",
            MonthName::October => "octubre",
            MonthName::November => "noviembre",
            MonthName::December => "diciembre",
        }
    }
}

impl FromStr for MonthName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_name(s);

        // Numeric form ("3", "03") is accepted as well.
        if let Ok(n) = folded.parse::<u32>() {
            return MonthName::from_number(n).ok_or_else(|| AppError::InvalidMonth(s.to_string()));
        }

        match folded.as_str() {
            "enero" | "january" | "jan" => Ok(MonthName::January),
            "febrero" | "february" | "feb" => Ok(MonthName::February),
            "marzo" | "march" | "mar" => Ok(MonthName::March),
            "abril" | "april" | "apr" => Ok(MonthName::April),
            "mayo" | "may" => Ok(MonthName::May),
            "junio" | "june" | "jun" => Ok(MonthName::June),
            "julio" | "july" | "jul" => Ok(MonthName::July),
            "agosto" | "august" | "aug" => Ok(MonthName::August),
            "septiembre" | "setiembre" | "september" | "sep" => Ok(MonthName::September),
            "octubre" | "october" | "oct" => Ok(MonthName::October),
            "noviembre" | "november" | "nov" => Ok(MonthName::November),
            "diciembre" | "december" | "dec" => Ok(MonthName::December),
            _ => Err(AppError::InvalidMonth(s.to_string())),
        }
    }
}

impl TryFrom<String> for MonthName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthName> for String {
    fn from(value: MonthName) -> Self {
        value.es_name().to_string()
    }
}

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.es_name())
    }
}
