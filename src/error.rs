//! [`Error`] type.

use std::fmt::{self, Display, Formatter};

use crate::currency::RateCategory;
use crate::transport::TransportError;

/// An error from the SIE API, the transport, or argument validation.
///
/// Everything surfaces to the immediate caller; the client never retries
/// and never falls back silently. The one deliberate degradation lives in
/// response normalization: a single non-numeric observation becomes a
/// `None` value instead of failing the whole query.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The client was constructed without a usable API token.
	#[error("a non-empty Bmx-Token is required")]
	Configuration,
	/// The logical currency id is not in the catalog.
	#[error("unknown currency {0:?}")]
	UnknownCurrency(String),
	/// The currency does not publish a series under the requested category.
	#[error("{currency} does not publish a {category} series")]
	UnsupportedRateCategory {
		/// Logical id of the currency the caller asked for.
		currency: &'static str,
		/// The category it does not support.
		category: RateCategory,
	},
	/// The date input could not be parsed as a calendar date.
	#[error("{0:?} is not a valid calendar date")]
	InvalidDate(String),
	/// The end of the query window precedes its start.
	#[error("window end {end} precedes start {start}")]
	InvalidWindow {
		/// Normalized start of the window.
		start: String,
		/// Normalized end of the window.
		end: String,
	},
	/// The API rejected the token (HTTP 401).
	#[error("the API token was rejected (HTTP {status})")]
	Authentication {
		/// The HTTP status, always 401.
		status: u16,
		/// The error body, when the response carried one.
		body: Option<serde_json::Value>,
	},
	/// The request quota was exceeded (HTTP 429).
	#[error("request quota exceeded (HTTP {status})")]
	RateLimitExceeded {
		/// The HTTP status, always 429.
		status: u16,
		/// The error body, when the response carried one.
		body: Option<serde_json::Value>,
	},
	/// Any other upstream failure: a non-2xx status, a timeout, or a
	/// connection error.
	#[error("upstream failure ({kind})")]
	Upstream {
		/// What went wrong, coarsely.
		kind: UpstreamKind,
		/// The HTTP status, when a response was received at all.
		status: Option<u16>,
		/// The error body, when the response carried one.
		body: Option<serde_json::Value>,
		/// The transport error, when the failure happened below HTTP.
		#[source]
		source: Option<TransportError>,
	},
	/// A success response whose payload does not match the expected
	/// `bmx.series[].datos[]` shape.
	#[error("response payload does not match the expected SIE shape")]
	MalformedResponse,
	/// A well-formed payload with zero observations for the requested scope.
	#[error("no observations available for {currency}")]
	DataNotFound {
		/// Logical id of the queried currency.
		currency: &'static str,
		/// The queried date, for single-date queries.
		date: Option<String>,
	},
}

/// Classifies [`Error::Upstream`].
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
	/// The API answered with a non-2xx status.
	Http,
	/// The per-call deadline elapsed before a response arrived.
	Timeout,
	/// The API could not be reached.
	Connection,
	/// Any other client-side transport failure.
	Transport,
}

impl Display for UpstreamKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Http => "http",
			Self::Timeout => "timeout",
			Self::Connection => "connection",
			Self::Transport => "transport",
		}
		.fmt(f)
	}
}
