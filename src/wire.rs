//! Adapters between the textual encodings of the DNSPod API and native types.

use core::{fmt, str::FromStr};

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

use crate::TimestampError;

/// Layout of every timestamp exchanged with the API.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

macro_rules! wire_flag {
    ($name:ident, $on:ident, $off:ident) => {
        impl $name {
            /// Gets the wire token of the flag.
            pub fn as_str(&self) -> &'static str {
                self.into()
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                if value { $name::$on } else { $name::$off }
            }
        }

        impl From<$name> for bool {
            fn from(value: $name) -> Self {
                value == $name::$on
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// A `"yes"`/`"no"` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

wire_flag!(YesNo, Yes, No);

/// An `"enable"`/`"disable"` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnableDisable {
    Enable,
    Disable,
}

wire_flag!(EnableDisable, Enable, Disable);

/// A `"1"`/`"0"` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
pub enum OneZero {
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    Zero,
}

wire_flag!(OneZero, One, Zero);

/// A point in time, exchanged as `YYYY-MM-DD HH:MM:SS` in the local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub fn new(datetime: DateTime<Local>) -> Self {
        Self(datetime)
    }

    pub fn as_datetime(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(value: DateTime<Local>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Local> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parses the literal as a local wall-clock time.
    ///
    /// Only malformed literals fail, see [from_wall_clock] for how times around
    /// clock changes resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map_err(|_| TimestampError::Malformed(s.to_string()))?;
        Ok(Self(from_wall_clock(&Local, &naive)))
    }
}

/// Resolves a wall-clock time in `tz` to an instant, whatever its offsets.
///
/// Times repeated by a backwards clock change resolve to the earliest instant.
/// Times skipped by a forward clock change keep the offset in force before the
/// change, so `02:30` in a `02:00`-`03:00` gap becomes `03:30`.
pub(crate) fn from_wall_clock<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(datetime) | LocalResult::Ambiguous(datetime, _) => datetime,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(*naive - TimeDelta::days(1)));
            let utc = *naive - TimeDelta::seconds(before.fix().local_minus_utc().into());
            tz.from_utc_datetime(&utc)
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

pub(crate) fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = StringOrI64::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        StringOrI64::I64(i) => i,
        StringOrI64::String(s) => s.parse().map_err(D::Error::custom)?,
    })
}

/// Like [deserialize_to_i64], but `null` and `""` become `None`.
pub(crate) fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = Option::<StringOrI64>::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        Some(StringOrI64::I64(i)) => Some(i),
        Some(StringOrI64::String(s)) if s.is_empty() => None,
        Some(StringOrI64::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        None => None,
    })
}

/// Helper type for deserializing a string or a number to an f64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrF64 {
    F64(f64),
    String(String),
}

/// Like [deserialize_to_option_i64], for amounts that may carry decimals.
pub(crate) fn deserialize_to_option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_f64 = Option::<StringOrF64>::deserialize(deserializer)?;
    Ok(match string_or_f64 {
        Some(StringOrF64::F64(f)) => Some(f),
        Some(StringOrF64::String(s)) if s.is_empty() => None,
        Some(StringOrF64::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        None => None,
    })
}
