//! A nullable SQL `DATETIME` value.
//!
//! [`SqlDateTime`] wraps an instant; the zero instant stands for SQL `NULL`.
//! It renders as `NOW()` (or `NULL`) when empty and as a quoted
//! `'YYYY-MM-DD HH:MM:SS'` literal otherwise, and it parses both the full
//! and the date-only textual forms back in the local zone.

// used for the instant itself
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
// used to recognize date-time literals
use lazy_static::lazy_static;
use regex::Regex;
// used when the value is bound or read through rusqlite
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
// used for the epoch seconds interchange form
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

use crate::capability::{Parsable, Renderable, SqlField};

lazy_static! {
    static ref DATETIME_LITERAL: Regex =
        Regex::new(r"^(\d{1,4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2}):(\d{1,2})(?:\.\d+)?)?$").unwrap();
}

const LITERAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `Y-MM-DD HH:MM:SS` for any instant, with the year left unpadded.
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format!(
        "{}-{:02}-{:02} {:02}:{:02}:{:02}",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

fn zero_instant() -> DateTime<FixedOffset> {
    DateTime::<Utc>::MIN_UTC.with_timezone(&Utc.fix())
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SqlDateTime {
    instant: DateTime<FixedOffset>,
}

impl SqlDateTime {
    /// The empty value, rendered as `NOW()` or `NULL`.
    pub fn null() -> Self {
        Self { instant: zero_instant() }
    }
    pub fn now() -> Self {
        Self::from(Local::now())
    }
    pub fn is_null(&self) -> bool {
        self.instant == zero_instant()
    }
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        if self.is_null() { None } else { Some(self.instant) }
    }
    /// Like [`Renderable::render`], but an empty value becomes `NULL` instead of `NOW()`.
    pub fn render_nullable(&self) -> String {
        if self.is_null() {
            "NULL".to_string()
        } else {
            format!("'{}'", self.literal())
        }
    }
    pub fn to_epoch(&self) -> i64 {
        if self.is_null() { 0 } else { self.instant.timestamp() }
    }
    pub fn zone(&self) -> FixedOffset {
        *self.instant.offset()
    }
    // the unquoted form, shared by rendering and binding
    fn literal(&self) -> String {
        self.instant.format(LITERAL_FORMAT).to_string()
    }
}

impl Default for SqlDateTime {
    fn default() -> Self {
        Self::null()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SqlDateTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self { instant: instant.fixed_offset() }
    }
}

impl Renderable for SqlDateTime {
    fn render(&self) -> String {
        if self.is_null() {
            "NOW()".to_string()
        } else {
            format!("'{}'", self.literal())
        }
    }
}

impl Parsable for SqlDateTime {
    fn parse_sql(&mut self, text: &str) -> bool {
        match parse_literal(text) {
            Some(instant) => {
                self.instant = instant;
                true
            }
            None => {
                *self = Self::null();
                false
            }
        }
    }
}

fn parse_literal(text: &str) -> Option<DateTime<FixedOffset>> {
    let caps = DATETIME_LITERAL.captures(text)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let date = NaiveDate::from_ymd_opt(number(1)? as i32, number(2)?, number(3)?)?;
    let naive: NaiveDateTime = match caps.get(4) {
        Some(_) => date.and_hms_opt(number(4)?, number(5)?, number(6)?)?,
        None => date.and_hms_opt(0, 0, 0)?,
    };
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
}

impl SqlField for SqlDateTime {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
    fn renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }
    fn parsable(&mut self) -> Option<&mut dyn Parsable> {
        Some(self)
    }
}

impl fmt::Display for SqlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
impl fmt::Debug for SqlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.instant() {
            Some(instant) => write!(f, "SqlDateTime({})", instant),
            None => write!(f, "SqlDateTime(NULL)"),
        }
    }
}

impl ToSql for SqlDateTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        if self.is_null() {
            Ok(ToSqlOutput::from(rusqlite::types::Null))
        } else {
            Ok(ToSqlOutput::from(self.literal()))
        }
    }
}
impl FromSql for SqlDateTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::null()),
            ValueRef::Text(_) => {
                let mut parsed = Self::null();
                parsed.parse_sql(value.as_str()?);
                Ok(parsed)
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

// Interchange form is the epoch seconds integer.
impl Serialize for SqlDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_epoch())
    }
}
impl<'de> Deserialize<'de> for SqlDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let epoch = i64::deserialize(deserializer)?;
        if epoch == 0 {
            return Ok(Self::null());
        }
        Local
            .timestamp_opt(epoch, 0)
            .single()
            .map(Self::from)
            .ok_or_else(|| serde::de::Error::custom(format!("epoch {} out of range", epoch)))
    }
}
