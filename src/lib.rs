//! [Banxico SIE](https://www.banxico.org.mx/SieAPIRest/service/v1/) exchange-rate API library.
//!
//! Fetches the daily exchange-rate series published by Banco de México's
//! Sistema de Información Económica and normalizes them into uniform
//! [`Observation`] records.
//!
//! # Examples
//! ```no_run
//! # fn main() -> Result<(), banxico_sie::Error> {
//! use banxico_sie::{catalog, RateCategory, SieClient};
//!
//! let client = SieClient::new("your-token")?;
//! let rate = client.get_latest(catalog::USD, RateCategory::Fix)?;
//! println!("{} USD: {:?}", rate.date, rate.value);
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

use std::fmt::{self, Display, Formatter};

use arrayvec::ArrayString;

pub mod client;
pub mod currency;
pub mod date;
pub mod error;
pub mod series;
pub mod transport;

pub use client::{SieClient, DEFAULT_TIMEOUT};
pub use currency::{catalog, Currency, CurrencyDescriptor, RateCategory};
pub use date::DateInput;
pub use error::{Error, UpstreamKind};
pub use series::Observation;
pub use transport::{HttpTransport, Transport};

/// [API token](https://www.banxico.org.mx/SieAPIRest/service/v1/token)
/// sent as the `Bmx-Token` request header.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct Token {
	/// The token string.
	///
	/// SIE tokens are 64 hex characters; 128 capacity leaves headroom.
	token: ArrayString<128>,
}

impl<'a> TryFrom<&'a str> for Token {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		if value.is_empty() {
			return Err(Error::Configuration);
		}
		ArrayString::try_from(value)
			.map(|token| Self { token })
			.map_err(|_| Error::Configuration)
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		self.token.as_ref()
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.token.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn token_roundtrips() {
		let token = Token::try_from("abc123").unwrap();
		assert_eq!(token.as_ref(), "abc123");
	}

	#[test]
	fn empty_token_is_rejected() {
		assert!(matches!(Token::try_from(""), Err(Error::Configuration)));
	}

	#[test]
	fn oversized_token_is_rejected() {
		let oversized = "a".repeat(129);
		assert!(matches!(
			Token::try_from(oversized.as_str()),
			Err(Error::Configuration)
		));
	}
}
