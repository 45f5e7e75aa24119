//! Display-date formatting. Applied once when a record is validated, so the
//! view only ever sees the final display string.

use crate::domain::DomainError;
use chrono::{DateTime, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Locale used to format a place's date for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `dd/mm/yyyy`
    #[default]
    PtBr,
    /// `mm/dd/yyyy`
    EnUs,
    /// `yyyy-mm-dd`
    Iso,
}

impl DateLocale {
    fn pattern(self) -> &'static str {
        match self {
            DateLocale::PtBr => "%d/%m/%Y",
            DateLocale::EnUs => "%m/%d/%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }

    /// Language tag for the document this locale is rendered into.
    pub fn lang(self) -> &'static str {
        match self {
            DateLocale::PtBr => "pt-BR",
            DateLocale::EnUs => "en-US",
            DateLocale::Iso => "en",
        }
    }

    /// Formats an ISO date (`2021-05-01`) or RFC 3339 timestamp
    /// (`2021-05-01T12:00:00Z`). Timestamps keep their own calendar date,
    /// no timezone conversion is applied.
    pub fn format(self, raw: &str) -> Result<String, DomainError> {
        let raw = raw.trim();
        let date = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.date_naive())
                .map_err(|e| DomainError::validation("date", format!("`{raw}`: {e}")))?,
        };
        Ok(date.format(self.pattern()).to_string())
    }
}

impl FromStr for DateLocale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt-br" => Ok(DateLocale::PtBr),
            "en-us" => Ok(DateLocale::EnUs),
            "iso" => Ok(DateLocale::Iso),
            other => Err(DomainError::Config(format!("unknown date locale `{other}`"))),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateLocale::PtBr => "pt-BR",
            DateLocale::EnUs => "en-US",
            DateLocale::Iso => "iso",
        })
    }
}
