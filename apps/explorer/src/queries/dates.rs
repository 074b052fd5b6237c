//! Configured date-string converters.
//!
//! A [`DateStringConverter`] captures an input and output [`DateFormat`] once
//! and can then be applied to any number of date strings.

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{DateParseError, QueryError};

const RFC_1123_RENDER: &str = "%a, %-d %b %Y %H:%M:%S GMT";
const ISO_DATE: &str = "%Y-%m-%d";
const ISO_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tue, 3 Jun 2008 11:05:30 GMT`, as found in the job feed.
    Rfc1123,
    /// `2008-06-03`
    IsoDate,
    /// `2008-06-03T11:05:30`
    IsoDateTime,
    /// Any strftime pattern, e.g. `%-m / %-d / %y`.
    Pattern(String),
}

impl DateFormat {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        DateFormat::Pattern(pattern.into())
    }

    /// Parses to a local date-time. Date-only inputs start at midnight.
    fn parse(&self, input: &str) -> Result<NaiveDateTime, DateParseError> {
        let parsed = match self {
            DateFormat::Rfc1123 => return parse_rfc1123(input),
            DateFormat::IsoDate => {
                NaiveDate::parse_from_str(input, ISO_DATE).map(|d| d.and_time(NaiveTime::MIN))
            }
            DateFormat::IsoDateTime => NaiveDateTime::parse_from_str(input, ISO_DATE_TIME),
            DateFormat::Pattern(pattern) => {
                NaiveDateTime::parse_from_str(input, pattern).or_else(|err| {
                    NaiveDate::parse_from_str(input, pattern)
                        .map(|d| d.and_time(NaiveTime::MIN))
                        .map_err(|_| err)
                })
            }
        };
        Ok(parsed?)
    }

    fn render(&self, value: &NaiveDateTime) -> Result<String, QueryError> {
        let pattern = match self {
            DateFormat::Rfc1123 => RFC_1123_RENDER,
            DateFormat::IsoDate => ISO_DATE,
            DateFormat::IsoDateTime => ISO_DATE_TIME,
            DateFormat::Pattern(pattern) => pattern.as_str(),
        };

        // An unknown specifier surfaces as a fmt error rather than a panic
        let mut rendered = String::new();
        write!(rendered, "{}", value.format(pattern)).map_err(|_| QueryError::Render {
            format: self.to_string(),
        })?;
        Ok(rendered)
    }
}

fn parse_rfc1123(input: &str) -> Result<NaiveDateTime, DateParseError> {
    let parsed = DateTime::parse_from_rfc2822(input)?;

    // RFC 2822 also accepts two- and three-digit years; RFC 1123 does not
    let year = rfc1123_year(input).unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::YearWidth(year.to_string()));
    }
    Ok(parsed.naive_local())
}

/// The year token of an RFC 1123 date: the third field after the optional weekday.
fn rfc1123_year(input: &str) -> Option<&str> {
    let mut fields = input.split_whitespace().peekable();
    if fields.peek().is_some_and(|field| field.ends_with(',')) {
        fields.next();
    }
    fields.nth(2)
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Rfc1123 => f.write_str("RFC 1123"),
            DateFormat::IsoDate => f.write_str("ISO date"),
            DateFormat::IsoDateTime => f.write_str("ISO date-time"),
            DateFormat::Pattern(pattern) => write!(f, "pattern '{pattern}'"),
        }
    }
}

/// Re-renders date strings from one format into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStringConverter {
    input: DateFormat,
    output: DateFormat,
}

impl DateStringConverter {
    pub fn new(input: DateFormat, output: DateFormat) -> Self {
        Self { input, output }
    }

    pub fn convert(&self, date_string: &str) -> Result<String, QueryError> {
        let parsed = self.input.parse(date_string).map_err(|source| QueryError::Parse {
            input: date_string.to_string(),
            format: self.input.to_string(),
            source,
        })?;
        self.output.render(&parsed)
    }

    /// Feeds this converter's output into `next`.
    pub fn then<'a>(
        &'a self,
        next: &'a DateStringConverter,
    ) -> impl Fn(&str) -> Result<String, QueryError> + 'a {
        move |date_string: &str| next.convert(&self.convert(date_string)?)
    }
}
