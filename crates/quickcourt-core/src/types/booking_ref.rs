//! Human-readable booking references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Prefix carried by every booking reference.
const PREFIX: &str = "QC";

/// Width of the zero-padded numeric suffix.
const SUFFIX_WIDTH: usize = 6;

/// A human-readable booking reference such as `QC000417`.
///
/// References are produced from a monotonic sequence (a Postgres sequence
/// in the database-backed store, an atomic counter in the in-memory one),
/// so uniqueness is guaranteed by construction and additionally enforced
/// by a UNIQUE column constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingRef(String);

impl BookingRef {
    /// Build the reference for the given sequence number.
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("{PREFIX}{seq:0width$}", width = SUFFIX_WIDTH))
    }

    /// Parse and validate an existing reference.
    pub fn parse(value: &str) -> AppResult<Self> {
        let suffix = value
            .strip_prefix(PREFIX)
            .ok_or_else(|| AppError::validation(format!("malformed booking reference '{value}'")))?;
        if suffix.len() < SUFFIX_WIDTH || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation(format!(
                "malformed booking reference '{value}'"
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookingRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for BookingRef {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for BookingRef {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for BookingRef {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Self::parse(&raw).map_err(Into::into)
    }
}
