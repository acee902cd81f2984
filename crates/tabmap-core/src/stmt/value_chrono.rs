use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::stmt::Value;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

macro_rules! impl_chrono_from {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$chrono> for Value {
            fn from(value: &$chrono) -> Self {
                Self::$name(*value)
            }
        }
    };
}

impl_chrono_from!(DateTime<Utc>, DateTime);
impl_chrono_from!(NaiveDateTime, NaiveDateTime);
impl_chrono_from!(NaiveDate, NaiveDate);

fn parse_naive_date_time(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::DateTime(v) => Some(*v),
            Value::NaiveDateTime(v) => Some(v.and_utc()),
            Value::String(s) => {
                let s = s.trim();
                DateTime::parse_from_rfc3339(s)
                    .map(|v| v.with_timezone(&Utc))
                    .ok()
                    .or_else(|| parse_naive_date_time(s).map(|v| v.and_utc()))
            }
            _ => None,
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "DateTime<Utc>"))
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::NaiveDateTime(v) => Some(*v),
            Value::DateTime(v) => Some(v.naive_utc()),
            Value::NaiveDate(v) => v.and_hms_opt(0, 0, 0),
            Value::String(s) => parse_naive_date_time(s.trim()),
            _ => None,
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "NaiveDateTime"))
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::NaiveDate(v) => Some(*v),
            Value::NaiveDateTime(v) => Some(v.date()),
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
            _ => None,
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "NaiveDate"))
    }
}
