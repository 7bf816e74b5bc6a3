//! Time slot labels and the daily booking schedule.
//!
//! Slots are discrete, non-overlapping, fixed-width hourly intervals drawn
//! from a finite enumerated daily schedule. A slot is identified by its
//! start hour and rendered as `"HH:00"` — the exact labels the stored
//! availability rows use.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::id::VenueId;

/// A single hourly time slot, identified by its start hour (0–23).
///
/// Ordering is chronological. When the `sqlx` feature is enabled the
/// label is stored as Postgres TEXT (`"14:00"`), including inside TEXT[]
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotLabel {
    hour: u8,
}

impl SlotLabel {
    /// Create a slot label from a start hour.
    ///
    /// Returns a validation error for hours outside 0–23.
    pub fn from_hour(hour: u8) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::validation(format!(
                "slot hour {hour} is out of range"
            )));
        }
        Ok(Self { hour })
    }

    /// Parse a label of the form `"HH:00"`.
    pub fn parse(label: &str) -> AppResult<Self> {
        let (hour, minute) = label
            .split_once(':')
            .ok_or_else(|| AppError::validation(format!("malformed slot label '{label}'")))?;
        if minute != "00" || hour.len() != 2 {
            return Err(AppError::validation(format!(
                "malformed slot label '{label}'"
            )));
        }
        let hour: u8 = hour
            .parse()
            .map_err(|_| AppError::validation(format!("malformed slot label '{label}'")))?;
        Self::from_hour(hour)
    }

    /// The start hour of this slot.
    pub fn hour(&self) -> u8 {
        self.hour
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

impl FromStr for SlotLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SlotLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse(&label).map_err(D::Error::custom)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for SlotLabel {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::postgres::PgHasArrayType for SlotLabel {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::postgres::PgHasArrayType>::array_type_info()
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for SlotLabel {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let label = self.to_string();
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&label, buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for SlotLabel {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let label = <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Self::parse(&label).map_err(Into::into)
    }
}

/// The unit of availability: one slot on one date at one venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    /// The venue.
    pub venue_id: VenueId,
    /// The calendar date.
    pub date: NaiveDate,
    /// The slot label.
    pub slot: SlotLabel,
}

impl SlotKey {
    /// Create a new slot key.
    pub fn new(venue_id: VenueId, date: NaiveDate, slot: SlotLabel) -> Self {
        Self {
            venue_id,
            date,
            slot,
        }
    }
}

/// The finite enumerated daily schedule bookings are drawn from.
///
/// Both bounds are inclusive start hours: the default of 6–22 yields the
/// seventeen slots `06:00` through `22:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    open_hour: u8,
    last_hour: u8,
}

impl DaySchedule {
    /// Create a schedule spanning `open_hour..=last_hour`.
    pub fn new(open_hour: u8, last_hour: u8) -> AppResult<Self> {
        if last_hour > 23 {
            return Err(AppError::configuration(format!(
                "schedule last hour {last_hour} is out of range"
            )));
        }
        if open_hour > last_hour {
            return Err(AppError::configuration(format!(
                "schedule opens at {open_hour} but closes at {last_hour}"
            )));
        }
        Ok(Self {
            open_hour,
            last_hour,
        })
    }

    /// Whether the given slot is part of this schedule.
    pub fn contains(&self, slot: SlotLabel) -> bool {
        (self.open_hour..=self.last_hour).contains(&slot.hour())
    }

    /// All slots of the schedule in chronological order.
    pub fn slots(&self) -> Vec<SlotLabel> {
        (self.open_hour..=self.last_hour)
            .map(|hour| SlotLabel { hour })
            .collect()
    }

    /// Number of slots in one day.
    pub fn len(&self) -> usize {
        usize::from(self.last_hour - self.open_hour) + 1
    }

    /// Whether the schedule is empty. It never is; a constructed schedule
    /// always holds at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for DaySchedule {
    /// Hourly slots from 06:00 through 22:00.
    fn default() -> Self {
        Self {
            open_hour: 6,
            last_hour: 22,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let slot = SlotLabel::parse("14:00").unwrap();
        assert_eq!(slot.hour(), 14);
        assert_eq!(slot.to_string(), "14:00");

        let early = SlotLabel::parse("06:00").unwrap();
        assert_eq!(early.to_string(), "06:00");
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        for label in ["6:00", "14:30", "14", "24:00", "ab:00", "14:00:00", ""] {
            assert!(SlotLabel::parse(label).is_err(), "accepted '{label}'");
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut slots = vec![
            SlotLabel::parse("18:00").unwrap(),
            SlotLabel::parse("06:00").unwrap(),
            SlotLabel::parse("12:00").unwrap(),
        ];
        slots.sort_unstable();
        let labels: Vec<String> = slots.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["06:00", "12:00", "18:00"]);
    }

    #[test]
    fn test_default_schedule() {
        let schedule = DaySchedule::default();
        let slots = schedule.slots();
        assert_eq!(slots.len(), 17);
        assert_eq!(slots[0].to_string(), "06:00");
        assert_eq!(slots[16].to_string(), "22:00");
        assert!(schedule.contains(SlotLabel::parse("14:00").unwrap()));
        assert!(!schedule.contains(SlotLabel::parse("05:00").unwrap()));
        assert!(!schedule.contains(SlotLabel::parse("23:00").unwrap()));
    }

    #[test]
    fn test_schedule_validation() {
        assert!(DaySchedule::new(6, 24).is_err());
        assert!(DaySchedule::new(10, 9).is_err());
        assert!(DaySchedule::new(9, 9).is_ok());
    }
}
