use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::value_format::ValueFormat;

/// Pattern used when no date style is configured (e.g. 1/15/2024)
pub const DEFAULT_DATE_PATTERN: &str = "%-m/%-d/%Y";

const WIRE_DATE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Key of the one-entry object that carries a date on the wire
const DATE_TAG: &str = "date";
const DATE_FIELDS: &[&str] = &[DATE_TAG];

/// A scalar value carried by a matrix node or cell.
///
/// On the wire strings always stay text. Dates travel as a tagged object,
/// `{"date": "2024-01-15"}`, holding an ISO-8601 date or date-time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Display string with no value scaling applied
    pub fn raw_display(&self) -> String {
        render_cell(self, ValueFormat::Default, &DateStyle::default())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Date(d) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(DATE_TAG, &d.format(WIRE_DATE_PATTERN).to_string())?;
                map.end()
            }
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellValueVisitor;

        impl<'de> Visitor<'de> for CellValueVisitor {
            type Value = CellValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("null, a boolean, a number, a string or a {\"date\": ...} object")
            }

            fn visit_unit<E: de::Error>(self) -> Result<CellValue, E> {
                Ok(CellValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<CellValue, E> {
                Ok(CellValue::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<CellValue, D::Error> {
                CellValue::deserialize(d)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<CellValue, E> {
                Ok(CellValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CellValue, E> {
                Ok(CellValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CellValue, E> {
                Ok(CellValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CellValue, E> {
                Ok(CellValue::Text(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CellValue, A::Error> {
                let mut text: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key != DATE_TAG {
                        return Err(de::Error::unknown_field(&key, DATE_FIELDS));
                    }
                    if text.is_some() {
                        return Err(de::Error::duplicate_field(DATE_TAG));
                    }
                    text = Some(map.next_value()?);
                }
                let text = text.ok_or_else(|| de::Error::missing_field(DATE_TAG))?;
                parse_date(&text).map(CellValue::Date).ok_or_else(|| {
                    de::Error::invalid_value(de::Unexpected::Str(&text), &"an ISO-8601 date or date-time")
                })
            }
        }

        deserializer.deserialize_any(CellValueVisitor)
    }
}

/// How dates are rendered. Only the pattern is configurable, there is no
/// locale parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStyle {
    pattern: String,
}

impl DateStyle {
    /// Returns `None` if the strftime pattern contains invalid specifiers
    pub fn new(pattern: &str) -> Option<Self> {
        let valid = StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
        valid.then(|| Self { pattern: pattern.to_string() })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn render(&self, date: &NaiveDateTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.pattern)).is_err() {
            out.clear();
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_PATTERN));
        }
        out
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self { pattern: DEFAULT_DATE_PATTERN.to_string() }
    }
}

/// Render a cell for display: numbers through the active value format,
/// dates through the date style, null as the empty string.
pub fn render_cell(value: &CellValue, format: ValueFormat, dates: &DateStyle) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Number(n) => format.format_value(*n),
        CellValue::Date(d) => dates.render(d),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Text(s) => s.clone(),
    }
}
