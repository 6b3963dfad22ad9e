//! The injected outbound-HTTP capability.

use std::collections::BTreeMap;
use std::time::Duration;

/// A single outbound request, ready for a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportRequest {
	/// Request method; the SIE series endpoint only ever needs GET.
	pub method: reqwest::Method,
	/// Request URL.
	pub url: String,
	/// Request headers, lowercase names.
	pub headers: BTreeMap<&'static str, String>,
	/// Per-call deadline.
	pub timeout: Duration,
}

/// The response envelope a [`Transport`] yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: String,
}

/// A transport-level failure, before any HTTP status was received.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
	/// The per-call deadline elapsed.
	#[error("the request timed out")]
	Timeout,
	/// The connection could not be established.
	#[error("connection failed: {0}")]
	Connection(String),
	/// Any other client-side failure.
	#[error("request failed: {0}")]
	Other(String),
}

/// The outbound-call capability the client delegates to.
///
/// The client issues exactly one call per operation and applies no retry
/// policy of its own; a transport is free to retry internally. A client
/// shared across threads is safe exactly when its transport is.
pub trait Transport: Send + Sync {
	/// Performs one HTTP exchange.
	fn call(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Default [`Transport`] over a blocking [`reqwest`] client.
///
/// Connection pooling and TLS live here; the per-request timeout comes
/// from the [`TransportRequest`].
#[derive(Debug, Default)]
pub struct HttpTransport {
	client: reqwest::blocking::Client,
}

impl HttpTransport {
	/// Creates a transport with a fresh connection pool.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps a preconfigured client (proxy, TLS, user agent).
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self { client }
	}
}

impl Transport for HttpTransport {
	fn call(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
		let mut builder = self
			.client
			.request(request.method.clone(), &request.url)
			.timeout(request.timeout);
		for (name, value) in &request.headers {
			builder = builder.header(*name, value.as_str());
		}
		let response = builder.send().map_err(classify)?;
		let status = response.status().as_u16();
		let body = response.text().map_err(classify)?;
		Ok(TransportResponse { status, body })
	}
}

fn classify(error: reqwest::Error) -> TransportError {
	if error.is_timeout() {
		TransportError::Timeout
	} else if error.is_connect() {
		TransportError::Connection(error.to_string())
	} else {
		TransportError::Other(error.to_string())
	}
}
