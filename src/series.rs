//! API for the [`series/{ids}/datos/{start}/{end}`](https://www.banxico.org.mx/SieAPIRest/service/v1/)
//! endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::currency::{Currency, RateCategory};
use crate::error::{Error, UpstreamKind};
use crate::transport::{Transport, TransportError, TransportRequest};
use crate::Token;

/// Base URL of the SIE series endpoint.
pub const BASE_URL: &str = "https://www.banxico.org.mx/SieAPIRest/service/v1/series";

/// Builds the request URL for a batch of series over an inclusive window.
///
/// The ids are comma-joined into one path segment. The facade currently
/// passes a single id per call; the list shape is kept so batching stays
/// representable at the request layer (normalization would then need to
/// key its output by series id, see [`normalize`]).
pub fn url(series_ids: &[&str], start: &str, end: &str) -> String {
	let mut url = String::with_capacity(
		BASE_URL.len() + series_ids.iter().map(|id| id.len() + 1).sum::<usize>()
			+ "/datos/".len() + start.len() + 1 + end.len(),
	);
	url.push_str(BASE_URL);
	url.push('/');
	let mut ids = series_ids.iter();
	if let Some(head) = ids.next() {
		url.push_str(head);
		for id in ids {
			url.push(',');
			url.push_str(id);
		}
	}
	url.push_str("/datos/");
	url.push_str(start);
	url.push('/');
	url.push_str(end);
	url
}

/// Wire shape of a success response.
#[derive(Debug, Deserialize)]
pub(crate) struct Payload {
	bmx: Bmx,
}

#[derive(Debug, Deserialize)]
struct Bmx {
	series: Vec<Series>,
}

#[derive(Debug, Deserialize)]
struct Series {
	// Absent (not merely empty) when the window holds no data; the
	// distinction matters, see `normalize`.
	datos: Option<Vec<Dato>>,
}

#[derive(Debug, Deserialize)]
struct Dato {
	fecha: String,
	// A decimal string, or a sentinel such as "N/E" when no value was
	// published for the date.
	dato: Option<String>,
}

/// Issues one request for the given series over an inclusive window and
/// classifies the outcome.
pub(crate) fn fetch(
	transport: &dyn Transport,
	token: &Token,
	series_ids: &[&str],
	start: &str,
	end: &str,
	timeout: Duration,
) -> Result<Payload, Error> {
	let request = TransportRequest {
		method: reqwest::Method::GET,
		url: url(series_ids, start, end),
		headers: [
			("bmx-token", token.as_ref().to_owned()),
			("accept", "application/json".to_owned()),
		]
		.into(),
		timeout,
	};
	log::debug!("GET {}", request.url);

	let response = transport.call(&request).map_err(|error| {
		let kind = match &error {
			TransportError::Timeout => UpstreamKind::Timeout,
			TransportError::Connection(_) => UpstreamKind::Connection,
			TransportError::Other(_) => UpstreamKind::Transport,
		};
		Error::Upstream { kind, status: None, body: None, source: Some(error) }
	})?;

	match response.status {
		401 => Err(Error::Authentication {
			status: response.status,
			body: error_body(&response.body),
		}),
		429 => Err(Error::RateLimitExceeded {
			status: response.status,
			body: error_body(&response.body),
		}),
		status if status >= 400 => {
			log::debug!("series request failed with HTTP {status}");
			Err(Error::Upstream {
				kind: UpstreamKind::Http,
				status: Some(status),
				body: error_body(&response.body),
				source: None,
			})
		}
		_ => serde_json::from_str(&response.body).map_err(|_| Error::MalformedResponse),
	}
}

fn error_body(body: &str) -> Option<serde_json::Value> {
	if body.is_empty() {
		None
	} else {
		serde_json::from_str(body).ok()
	}
}

/// One normalized exchange-rate observation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Observation {
	/// The date exactly as reported upstream (e.g. `"01/12/2024"`); not
	/// reformatted.
	pub date: String,
	/// Logical id of the currency.
	pub currency: &'static str,
	/// English display name of the currency.
	pub currency_name: &'static str,
	/// Display symbol of the currency.
	pub symbol: &'static str,
	/// The published value; `None` when the upstream reported a
	/// non-numeric sentinel for the date.
	pub value: Option<f64>,
	/// The rate category of the series the value came from; exposes the
	/// machine code and description.
	pub category: RateCategory,
}

/// Normalizes a payload into observations, attaching catalog metadata to
/// every record.
///
/// Only the first series entry is read. That is fine for the facade,
/// which requests one series at a time; unfolding batched responses
/// would require keying the output by series id.
///
/// An empty `datos` list fails with [`Error::DataNotFound`]; the range
/// facade converts that into an empty result, the single-date facade
/// propagates it.
pub(crate) fn normalize(
	payload: Payload,
	currency: Currency,
	category: RateCategory,
) -> Result<Vec<Observation>, Error> {
	let series = payload
		.bmx
		.series
		.into_iter()
		.next()
		.ok_or(Error::MalformedResponse)?;
	let datos = series.datos.ok_or(Error::MalformedResponse)?;
	if datos.is_empty() {
		return Err(Error::DataNotFound { currency: currency.code(), date: None });
	}
	Ok(datos
		.into_iter()
		.map(|entry| Observation {
			date: entry.fecha,
			currency: currency.code(),
			currency_name: currency.name(),
			symbol: currency.symbol(),
			value: entry.dato.as_deref().and_then(|raw| raw.trim().parse().ok()),
			category,
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::catalog;

	fn payload(body: &str) -> Payload {
		serde_json::from_str(body).expect("test payload deserializes")
	}

	#[test]
	fn url_joins_series_ids_with_commas() {
		assert_eq!(
			url(&["SF43718", "SF60653"], "2024-12-01", "2024-12-31"),
			"https://www.banxico.org.mx/SieAPIRest/service/v1/series/SF43718,SF60653/datos/2024-12-01/2024-12-31"
		);
	}

	#[test]
	fn url_with_single_series() {
		assert_eq!(
			url(&["SF46410"], "2024-12-01", "2024-12-01"),
			"https://www.banxico.org.mx/SieAPIRest/service/v1/series/SF46410/datos/2024-12-01/2024-12-01"
		);
	}

	#[test]
	fn numeric_values_are_coerced() {
		let observations = normalize(
			payload(r#"{"bmx":{"series":[{"datos":[{"fecha":"01/12/2024","dato":"20.3456"}]}]}}"#),
			catalog::USD,
			RateCategory::Fix,
		)
		.unwrap();
		assert_eq!(observations.len(), 1);
		assert_eq!(observations[0].value, Some(20.3456));
		assert_eq!(observations[0].date, "01/12/2024");
	}

	#[test]
	fn sentinel_values_become_none_not_errors() {
		let observations = normalize(
			payload(r#"{"bmx":{"series":[{"datos":[{"fecha":"01/12/2024","dato":"N/E"}]}]}}"#),
			catalog::USD,
			RateCategory::Fix,
		)
		.unwrap();
		assert_eq!(observations[0].value, None);
	}

	#[test]
	fn absent_dato_becomes_none() {
		let observations = normalize(
			payload(r#"{"bmx":{"series":[{"datos":[{"fecha":"01/12/2024"}]}]}}"#),
			catalog::USD,
			RateCategory::Fix,
		)
		.unwrap();
		assert_eq!(observations[0].value, None);
	}

	#[test]
	fn catalog_metadata_is_attached() {
		let observations = normalize(
			payload(r#"{"bmx":{"series":[{"datos":[{"fecha":"01/12/2024","dato":"7.65"}]}]}}"#),
			catalog::CAD,
			RateCategory::Fix,
		)
		.unwrap();
		let observation = &observations[0];
		assert_eq!(observation.currency, "CAD");
		assert_eq!(observation.currency_name, "Canadian dollar");
		assert_eq!(observation.symbol, "C$");
		assert_eq!(observation.category.code(), "fix");
	}

	#[test]
	fn upstream_ordering_is_preserved() {
		let observations = normalize(
			payload(
				r#"{"bmx":{"series":[{"datos":[
					{"fecha":"02/12/2024","dato":"20.1"},
					{"fecha":"03/12/2024","dato":"N/E"},
					{"fecha":"04/12/2024","dato":"20.3"}
				]}]}}"#,
			),
			catalog::USD,
			RateCategory::Fix,
		)
		.unwrap();
		let dates: Vec<&str> = observations.iter().map(|o| o.date.as_str()).collect();
		assert_eq!(dates, ["02/12/2024", "03/12/2024", "04/12/2024"]);
		assert_eq!(observations[1].value, None);
	}

	#[test]
	fn empty_datos_is_data_not_found() {
		match normalize(
			payload(r#"{"bmx":{"series":[{"datos":[]}]}}"#),
			catalog::USD,
			RateCategory::Fix,
		) {
			Err(Error::DataNotFound { currency, date }) => {
				assert_eq!(currency, "USD");
				assert_eq!(date, None);
			}
			other => panic!("expected DataNotFound, got {other:?}"),
		}
	}

	#[test]
	fn empty_series_list_is_malformed() {
		match normalize(payload(r#"{"bmx":{"series":[]}}"#), catalog::USD, RateCategory::Fix) {
			Err(Error::MalformedResponse) => {}
			other => panic!("expected MalformedResponse, got {other:?}"),
		}
	}

	#[test]
	fn absent_datos_key_is_malformed() {
		match normalize(
			payload(r#"{"bmx":{"series":[{"idSerie":"SF43718"}]}}"#),
			catalog::USD,
			RateCategory::Fix,
		) {
			Err(Error::MalformedResponse) => {}
			other => panic!("expected MalformedResponse, got {other:?}"),
		}
	}

	#[test]
	fn missing_top_level_keys_fail_deserialization() {
		assert!(serde_json::from_str::<Payload>(r#"{"unexpected":{}}"#).is_err());
	}
}
