// src/types.rs
//! Small value types for ids, dates, binary data, regexes and code.

use crate::constants::BIN_ARRAY;
use crate::error::{Error, Result};
use bson::oid::ObjectId;
use bson::spec::BinarySubtype;
use bson::{Binary, Bson, DateTime, Document, JavaScriptCodeWithScope, Regex};
use chrono::Utc;
use std::fmt;

/// 12-byte object id, shown as 24 lower-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MongoId(ObjectId);

impl MongoId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn parse(hex: &str) -> Result<Self> {
        ObjectId::parse_str(hex)
            .map(Self)
            .map_err(|_| Error::InvalidObjectId(hex.to_string()))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for MongoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MongoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for MongoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<MongoId> for Bson {
    fn from(id: MongoId) -> Self {
        Bson::ObjectId(id.0)
    }
}

/// Seconds plus microseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MongoDate {
    pub sec: i64,
    pub usec: i64,
}

impl MongoDate {
    pub fn new(sec: i64, usec: i64) -> Self {
        Self { sec, usec }
    }

    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            sec: now.timestamp(),
            usec: now.timestamp_subsec_micros() as i64,
        }
    }

    pub fn from_millis(ms: i64) -> Self {
        Self {
            sec: ms / 1000,
            usec: (ms % 1000) * 1000,
        }
    }

    /// Saturates at the ends of the `i64` range.
    pub fn timestamp_millis(&self) -> i64 {
        self.sec
            .saturating_mul(1000)
            .saturating_add(self.usec / 1000)
    }
}

impl fmt::Display for MongoDate {
    /// `"0.12345600 1700000000"`: fractional seconds, then whole seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8} {}", self.usec as f64 / 1_000_000.0, self.sec)
    }
}

impl From<MongoDate> for DateTime {
    fn from(date: MongoDate) -> Self {
        DateTime::from_millis(date.timestamp_millis())
    }
}

impl From<DateTime> for MongoDate {
    fn from(dt: DateTime) -> Self {
        MongoDate::from_millis(dt.timestamp_millis())
    }
}

impl From<MongoDate> for Bson {
    fn from(date: MongoDate) -> Self {
        Bson::DateTime(date.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinData {
    pub bin: Vec<u8>,
    pub subtype: u8,
}

impl BinData {
    /// Byte-array subtype unless told otherwise.
    pub fn new(bin: impl Into<Vec<u8>>) -> Self {
        Self::with_subtype(bin, BIN_ARRAY)
    }

    pub fn with_subtype(bin: impl Into<Vec<u8>>, subtype: u8) -> Self {
        Self {
            bin: bin.into(),
            subtype,
        }
    }

    pub fn len(&self) -> usize {
        self.bin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bin.is_empty()
    }
}

impl fmt::Display for BinData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Mongo Binary Data>")
    }
}

impl From<BinData> for Bson {
    fn from(data: BinData) -> Self {
        Bson::Binary(Binary {
            subtype: BinarySubtype::from(data.subtype),
            bytes: data.bin,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoRegex {
    pub regex: String,
    pub flags: String,
}

impl MongoRegex {
    /// Parses `/pattern/flags`. The pattern runs up to the last `/`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRegex(s.to_string());
        let body = s.strip_prefix('/').ok_or_else(invalid)?;
        let end = body.rfind('/').ok_or_else(invalid)?;
        Ok(Self {
            regex: body[..end].to_string(),
            flags: body[end + 1..].to_string(),
        })
    }
}

impl fmt::Display for MongoRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.regex, self.flags)
    }
}

impl From<MongoRegex> for Bson {
    fn from(re: MongoRegex) -> Self {
        Bson::RegularExpression(Regex {
            pattern: re.regex,
            options: re.flags,
        })
    }
}

/// JavaScript code with an optional variable scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MongoCode {
    pub code: String,
    pub scope: Document,
}

impl MongoCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            scope: Document::new(),
        }
    }

    pub fn with_scope(code: impl Into<String>, scope: Document) -> Self {
        Self {
            code: code.into(),
            scope,
        }
    }
}

impl fmt::Display for MongoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<MongoCode> for Bson {
    fn from(code: MongoCode) -> Self {
        if code.scope.is_empty() {
            Bson::JavaScriptCode(code.code)
        } else {
            Bson::JavaScriptCodeWithScope(JavaScriptCodeWithScope {
                code: code.code,
                scope: code.scope,
            })
        }
    }
}
