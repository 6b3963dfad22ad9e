//! Date inputs and their normalization to the API's `YYYY-MM-DD` path format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::Error;

/// A date argument in any of the accepted representations.
///
/// Conversions exist from strings, [`NaiveDate`], [`NaiveDateTime`] and
/// timezone-aware [`DateTime`]s, so facade callers can pass whichever
/// they have on hand.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
	/// A textual date: `YYYY-MM-DD`, or an RFC 3339 date-time.
	Text(String),
	/// A calendar date.
	Date(NaiveDate),
	/// A date-time; only the date part is used.
	DateTime(NaiveDateTime),
}

impl DateInput {
	/// Parses the input into a calendar date.
	///
	/// Textual inputs fail with [`Error::InvalidDate`] when they are
	/// neither a plain date nor an RFC 3339 date-time; structured inputs
	/// cannot fail.
	pub fn resolve(&self) -> Result<NaiveDate, Error> {
		match self {
			Self::Text(text) => text
				.parse::<NaiveDate>()
				.or_else(|_| DateTime::parse_from_rfc3339(text).map(|datetime| datetime.date_naive()))
				.map_err(|_| Error::InvalidDate(text.clone())),
			Self::Date(date) => Ok(*date),
			Self::DateTime(datetime) => Ok(datetime.date()),
		}
	}
}

impl From<&str> for DateInput {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<String> for DateInput {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<NaiveDate> for DateInput {
	fn from(date: NaiveDate) -> Self {
		Self::Date(date)
	}
}

impl From<NaiveDateTime> for DateInput {
	fn from(datetime: NaiveDateTime) -> Self {
		Self::DateTime(datetime)
	}
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
	fn from(datetime: DateTime<Tz>) -> Self {
		Self::DateTime(datetime.naive_local())
	}
}

/// Formats a date the way the API's path expects it: zero-padded
/// `YYYY-MM-DD`.
pub(crate) fn format_date(date: NaiveDate) -> String {
	date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn normalize(input: DateInput) -> Result<String, Error> {
		input.resolve().map(format_date)
	}

	#[test]
	fn formatted_text_passes_through() {
		assert_eq!(normalize("2024-12-01".into()).unwrap(), "2024-12-01");
	}

	#[test]
	fn structured_date_matches_text() {
		let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
		assert_eq!(normalize(date.into()).unwrap(), "2024-12-01");
		assert_eq!(
			normalize(date.into()).unwrap(),
			normalize("2024-12-01".into()).unwrap()
		);
	}

	#[test]
	fn output_is_zero_padded() {
		let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
		assert_eq!(normalize(date.into()).unwrap(), "2024-01-05");
	}

	#[test]
	fn rfc3339_datetime_keeps_its_date_part() {
		assert_eq!(
			normalize("2024-12-01T10:30:00-06:00".into()).unwrap(),
			"2024-12-01"
		);
	}

	#[test]
	fn datetime_input_drops_the_time() {
		let datetime = NaiveDate::from_ymd_opt(2024, 12, 1)
			.unwrap()
			.and_hms_opt(23, 59, 59)
			.unwrap();
		assert_eq!(normalize(datetime.into()).unwrap(), "2024-12-01");
	}

	#[test]
	fn aware_datetime_keeps_its_local_date() {
		let datetime = DateTime::parse_from_rfc3339("2024-12-01T23:00:00-06:00").unwrap();
		assert_eq!(normalize(datetime.into()).unwrap(), "2024-12-01");
	}

	#[test]
	fn gibberish_is_rejected() {
		match normalize("yesterday".into()) {
			Err(Error::InvalidDate(text)) => assert_eq!(text, "yesterday"),
			other => panic!("expected InvalidDate, got {other:?}"),
		}
	}
}
