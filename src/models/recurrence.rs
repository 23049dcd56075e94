use crate::errors::{AppError, AppResult};
use crate::models::month::MonthName;
use crate::models::weekday::WeekdayName;
use crate::utils::time::{format_hhmm, parse_time_strict};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[serde(alias = "diario")]
    Daily,
    #[serde(alias = "semanal")]
    Weekly,
    #[serde(alias = "mensual")]
    Monthly,
    #[serde(alias = "anual")]
    Yearly,
    #[serde(alias = "desactivado", alias = "off")]
    Disabled,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
            Frequency::Disabled => "disabled",
        }
    }
}

/// Day of month in 1..=31. Whether the day exists in a given month is
/// decided when the recurrence is resolved (it is clamped there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfMonth(u32);

impl DayOfMonth {
    pub fn new(day: u32) -> AppResult<Self> {
        if (1..=31).contains(&day) {
            Ok(Self(day))
        } else {
            Err(AppError::InvalidDayOfMonth(day))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// When a recurring job (the backup) fires next. Each variant carries
/// exactly the fields its frequency needs, so an incomplete rule cannot
/// be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecurrenceFields", into = "RecurrenceFields")]
pub enum RecurrenceSpec {
    Disabled,
    Daily {
        at: NaiveTime,
    },
    Weekly {
        at: NaiveTime,
        weekday: WeekdayName,
    },
    Monthly {
        at: NaiveTime,
        day: DayOfMonth,
    },
    Yearly {
        at: NaiveTime,
        month: MonthName,
        day: DayOfMonth,
    },
}

impl RecurrenceSpec {
    /// Build a spec from the loose field set a settings screen or config
    /// file provides. Fields that the frequency does not use are ignored;
    /// fields it needs must be present.
    pub fn new(
        frequency: Frequency,
        at: Option<NaiveTime>,
        weekday: Option<WeekdayName>,
        day: Option<u32>,
        month: Option<MonthName>,
    ) -> AppResult<Self> {
        if frequency == Frequency::Disabled {
            return Ok(RecurrenceSpec::Disabled);
        }

        let missing = |field: &str| {
            AppError::Config(format!(
                "{} schedule requires '{}'",
                frequency.as_str(),
                field
            ))
        };

        let at = at.ok_or_else(|| missing("time"))?;

        let spec = match frequency {
            Frequency::Daily => RecurrenceSpec::Daily { at },
            Frequency::Weekly => RecurrenceSpec::Weekly {
                at,
                weekday: weekday.ok_or_else(|| missing("day_of_week"))?,
            },
            Frequency::Monthly => RecurrenceSpec::Monthly {
                at,
                day: DayOfMonth::new(day.ok_or_else(|| missing("day_of_month"))?)?,
            },
            Frequency::Yearly => RecurrenceSpec::Yearly {
                at,
                month: month.ok_or_else(|| missing("month"))?,
                day: DayOfMonth::new(day.ok_or_else(|| missing("day_of_month"))?)?,
            },
            Frequency::Disabled => RecurrenceSpec::Disabled,
        };

        Ok(spec)
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            RecurrenceSpec::Disabled => Frequency::Disabled,
            RecurrenceSpec::Daily { .. } => Frequency::Daily,
            RecurrenceSpec::Weekly { .. } => Frequency::Weekly,
            RecurrenceSpec::Monthly { .. } => Frequency::Monthly,
            RecurrenceSpec::Yearly { .. } => Frequency::Yearly,
        }
    }

    pub fn time_of_day(&self) -> Option<NaiveTime> {
        match self {
            RecurrenceSpec::Disabled => None,
            RecurrenceSpec::Daily { at }
            | RecurrenceSpec::Weekly { at, .. }
            | RecurrenceSpec::Monthly { at, .. }
            | RecurrenceSpec::Yearly { at, .. } => Some(*at),
        }
    }
}

impl fmt::Display for RecurrenceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceSpec::Disabled => write!(f, "disabled"),
            RecurrenceSpec::Daily { at } => write!(f, "daily at {}", format_hhmm(*at)),
            RecurrenceSpec::Weekly { at, weekday } => {
                write!(f, "weekly on {} at {}", weekday, format_hhmm(*at))
            }
            RecurrenceSpec::Monthly { at, day } => {
                write!(f, "monthly on day {} at {}", day.get(), format_hhmm(*at))
            }
            RecurrenceSpec::Yearly { at, month, day } => write!(
                f,
                "yearly on {} {} at {}",
                day.get(),
                month,
                format_hhmm(*at)
            ),
        }
    }
}

/// On-disk shape of a recurrence (`backup_schedule` in the config file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceFields {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<WeekdayName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthName>,
}

impl TryFrom<RecurrenceFields> for RecurrenceSpec {
    type Error = AppError;

    fn try_from(raw: RecurrenceFields) -> Result<Self, Self::Error> {
        let at = raw.time.as_deref().map(parse_time_strict).transpose()?;
        RecurrenceSpec::new(
            raw.frequency,
            at,
            raw.day_of_week,
            raw.day_of_month,
            raw.month,
        )
    }
}

impl From<RecurrenceSpec> for RecurrenceFields {
    fn from(spec: RecurrenceSpec) -> Self {
        let mut raw = RecurrenceFields {
            frequency: spec.frequency(),
            time: spec.time_of_day().map(format_hhmm),
            day_of_week: None,
            day_of_month: None,
            month: None,
        };

        match spec {
            RecurrenceSpec::Weekly { weekday, .. } => raw.day_of_week = Some(weekday),
            RecurrenceSpec::Monthly { day, .. } => raw.day_of_month = Some(day.get()),
            RecurrenceSpec::Yearly { month, day, .. } => {
                raw.month = Some(month);
                raw.day_of_month = Some(day.get());
            }
            RecurrenceSpec::Disabled | RecurrenceSpec::Daily { .. } => {}
        }

        raw
    }
}

/// Result of resolving a recurrence against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "at", rename_all = "lowercase")]
pub enum NextOccurrence {
    At(NaiveDateTime),
    Disabled,
}

impl NextOccurrence {
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            NextOccurrence::At(dt) => Some(*dt),
            NextOccurrence::Disabled => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, NextOccurrence::Disabled)
    }
}
