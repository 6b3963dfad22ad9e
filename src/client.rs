//! The [`SieClient`] facade.

use std::time::Duration;

use chrono::Local;

use crate::currency::{Currency, RateCategory};
use crate::date::{format_date, DateInput};
use crate::error::Error;
use crate::series::{self, Observation};
use crate::transport::{HttpTransport, Transport};
use crate::Token;

/// Default per-call deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Synchronous client for the SIE exchange-rate series.
///
/// Each operation resolves its series id from the [catalog](crate::catalog),
/// normalizes its date arguments, issues exactly one request through the
/// [`Transport`], and normalizes the response into [`Observation`]s. No
/// retries, no caching; see [`Error`] for the failure taxonomy.
///
/// # Examples
/// ```no_run
/// # fn main() -> Result<(), banxico_sie::Error> {
/// use banxico_sie::{catalog, RateCategory, SieClient};
///
/// let client = SieClient::new("your-token")?;
/// let rate = client.get_latest(catalog::USD, RateCategory::Fix)?;
/// println!("{}: {:?}", rate.date, rate.value);
/// # Ok(()) }
/// ```
pub struct SieClient {
	token: Token,
	transport: Box<dyn Transport>,
	timeout: Duration,
}

impl SieClient {
	/// Creates a client over the default [`HttpTransport`] with the
	/// [default deadline](DEFAULT_TIMEOUT).
	///
	/// Fails with [`Error::Configuration`] when the token is empty.
	pub fn new(token: &str) -> Result<Self, Error> {
		Self::with_transport(token, Box::new(HttpTransport::new()), DEFAULT_TIMEOUT)
	}

	/// Creates a client over the default [`HttpTransport`] with a custom
	/// per-call deadline.
	pub fn with_timeout(token: &str, timeout: Duration) -> Result<Self, Error> {
		Self::with_transport(token, Box::new(HttpTransport::new()), timeout)
	}

	/// Creates a client over an injected [`Transport`].
	pub fn with_transport(
		token: &str,
		transport: Box<dyn Transport>,
		timeout: Duration,
	) -> Result<Self, Error> {
		Ok(Self { token: Token::try_from(token)?, transport, timeout })
	}

	/// Fetches the rate published for one date.
	///
	/// `date` defaults to the current local calendar date, which the API
	/// answers with its most recent available print. Fails with
	/// [`Error::DataNotFound`] when the date has no observation.
	pub fn get_rate(
		&self,
		currency: Currency,
		date: Option<DateInput>,
		category: RateCategory,
	) -> Result<Observation, Error> {
		let series_id = currency.series(category)?;
		let date = match date {
			Some(input) => input.resolve()?,
			None => Local::now().date_naive(),
		};
		let formatted = format_date(date);
		let payload = series::fetch(
			self.transport.as_ref(),
			&self.token,
			&[series_id],
			&formatted,
			&formatted,
			self.timeout,
		)?;
		let observations =
			series::normalize(payload, currency, category).map_err(|error| match error {
				Error::DataNotFound { currency, .. } => {
					Error::DataNotFound { currency, date: Some(formatted.clone()) }
				}
				other => other,
			})?;
		observations
			.into_iter()
			.next()
			.ok_or(Error::DataNotFound { currency: currency.code(), date: Some(formatted) })
	}

	/// Fetches the rates published over an inclusive date window.
	///
	/// A window with zero matching days is an empty vector, not an error;
	/// contrast with the single-date [`get_rate`](Self::get_rate).
	pub fn get_rates_range(
		&self,
		currency: Currency,
		start: DateInput,
		end: DateInput,
		category: RateCategory,
	) -> Result<Vec<Observation>, Error> {
		let series_id = currency.series(category)?;
		let start = start.resolve()?;
		let end = end.resolve()?;
		if end < start {
			return Err(Error::InvalidWindow {
				start: format_date(start),
				end: format_date(end),
			});
		}
		let (start, end) = (format_date(start), format_date(end));
		let payload = series::fetch(
			self.transport.as_ref(),
			&self.token,
			&[series_id],
			&start,
			&end,
			self.timeout,
		)?;
		match series::normalize(payload, currency, category) {
			Ok(observations) => Ok(observations),
			Err(Error::DataNotFound { .. }) => Ok(Vec::new()),
			Err(error) => Err(error),
		}
	}

	/// Fetches the most recent available print.
	///
	/// Sugar for [`get_rate`](Self::get_rate) with no explicit date: the
	/// upstream answers a "today" query with its latest published value,
	/// so no local computation of "latest" is involved.
	pub fn get_latest(
		&self,
		currency: Currency,
		category: RateCategory,
	) -> Result<Observation, Error> {
		self.get_rate(currency, None, category)
	}
}
