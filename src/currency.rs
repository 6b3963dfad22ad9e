//! Currencies, rate categories, and their SIE series.

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::Error;

/// Rate category of a published series.
///
/// Every catalog entry publishes a [FIX](RateCategory::Fix) series; only
/// [`USD`](catalog::USD) also publishes a
/// [settlement](RateCategory::Settlement) series.
#[derive(Debug, Default, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateCategory {
	/// The official daily reference rate.
	#[default]
	Fix,
	/// The rate used for settling obligations.
	Settlement,
}

impl RateCategory {
	/// Short machine code for the category.
	pub const fn code(self) -> &'static str {
		match self {
			Self::Fix => "fix",
			Self::Settlement => "settlement",
		}
	}

	/// Human-readable description of the category.
	pub const fn description(self) -> &'static str {
		match self {
			Self::Fix => "FIX rate published in the Diario Oficial de la Federación",
			Self::Settlement => "rate for settling obligations denominated in foreign currency",
		}
	}
}

impl Display for RateCategory {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.code().fmt(f)
	}
}

impl FromStr for RateCategory {
	type Err = InvalidRateCategoryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("fix") {
			Ok(Self::Fix)
		} else if s.eq_ignore_ascii_case("settlement") {
			Ok(Self::Settlement)
		} else {
			Err(InvalidRateCategoryError)
		}
	}
}

/// Unrecognized rate-category name.
///
/// Valid names are `fix` and `settlement`, case-insensitive.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRateCategoryError;

impl Display for InvalidRateCategoryError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		"invalid rate category, expected `fix` or `settlement`".fmt(f)
	}
}

impl std::error::Error for InvalidRateCategoryError {}

/// Static catalog entry backing a [`Currency`].
#[derive(Debug)]
pub struct CurrencyDescriptor {
	/// Logical id, e.g. `"USD"`.
	pub code: &'static str,
	/// English display name.
	pub name: &'static str,
	/// Display symbol.
	pub symbol: &'static str,
	/// Series id of the FIX category. Every entry has one.
	pub series_fix: &'static str,
	/// Series id of the settlement category, for the currencies that
	/// publish one.
	pub series_settlement: Option<&'static str>,
}

/// Handle to an entry of the [`catalog`].
///
/// Copyable and cheap; use the constants in the [`catalog`] module, or
/// [`Currency::from_code`] when the logical id arrives at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Currency(&'static CurrencyDescriptor);

impl Currency {
	/// Logical id, e.g. `"USD"`.
	#[inline] pub const fn code(self) -> &'static str { self.0.code }
	/// English display name.
	#[inline] pub const fn name(self) -> &'static str { self.0.name }
	/// Display symbol.
	#[inline] pub const fn symbol(self) -> &'static str { self.0.symbol }
	/// The full catalog entry.
	#[inline] pub const fn descriptor(self) -> &'static CurrencyDescriptor { self.0 }

	/// Resolves the SIE series id publishing this currency under the
	/// given category.
	///
	/// The resolution is a pure lookup over static data: FIX always
	/// succeeds, settlement succeeds only for the entries that define a
	/// settlement series.
	pub fn series(self, category: RateCategory) -> Result<&'static str, Error> {
		match category {
			RateCategory::Fix => Ok(self.0.series_fix),
			RateCategory::Settlement => {
				self.0.series_settlement.ok_or(Error::UnsupportedRateCategory {
					currency: self.0.code,
					category,
				})
			}
		}
	}

	/// Looks a currency up by its logical id, case-insensitively.
	pub fn from_code(code: &str) -> Result<Self, Error> {
		catalog::ARRAY
			.iter()
			.copied()
			.find(|currency| currency.code().eq_ignore_ascii_case(code))
			.ok_or_else(|| Error::UnknownCurrency(code.to_owned()))
	}
}

impl PartialEq for Currency {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.0, other.0)
	}
}

impl Eq for Currency {}

impl Hash for Currency {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.code.hash(state)
	}
}

impl Display for Currency {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.0.code.fmt(f)
	}
}

impl FromStr for Currency {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_code(s)
	}
}

pub mod catalog {
	//! [`Currency`](super::Currency) constants.
	//!
	//! One constant per supported currency, plus [`ARRAY`] holding all of
	//! them. Adding a currency is a data change here, not a logic change:
	//! the resolution in [`Currency::series`](super::Currency::series)
	//! branches over the entry's optional settlement series, never over
	//! the currency itself.

	/// Defines const [`Currency`](super::Currency) catalog entries.
	macro_rules! define_currencies {
		($($id:ident => $name:literal, $symbol:literal, fix: $fix:literal $(, settlement: $settlement:literal)?;)*) => {
			$(
				#[doc = concat!("The ", $name, " (FIX series `", $fix, "`).")]
				pub const $id: super::Currency = {
					// A `static` gives the descriptor a unique, stable
					// address, which `Currency`'s pointer-identity equality
					// relies on; a promoted const temporary would not.
					static DESCRIPTOR: super::CurrencyDescriptor = super::CurrencyDescriptor {
						code: stringify!($id),
						name: $name,
						symbol: $symbol,
						series_fix: $fix,
						series_settlement: define_currencies!(@settlement $($settlement)?),
					};
					super::Currency(&DESCRIPTOR)
				};
			)*
			/// The number of currencies defined in this module.
			const LEN: usize = 0 $(+ { stringify!($id); 1 })*;
			/// Every currency in the catalog.
			pub const ARRAY: [super::Currency; LEN] = [ $( $id ),* ];
		};
		(@settlement) => { None };
		(@settlement $settlement:literal) => { Some($settlement) };
	}

	// Series ids are listed in the SIE catalog:
	// https://www.banxico.org.mx/SieAPIRest/service/v1/doc/catalogoSeries
	define_currencies!(
		USD => "U.S. dollar", "$", fix: "SF43718", settlement: "SF60653";
		CAD => "Canadian dollar", "C$", fix: "SF57770";
		EUR => "euro", "€", fix: "SF46410";
		JPY => "Japanese yen", "¥", fix: "SF46406";
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fix_resolution_is_deterministic() {
		for currency in catalog::ARRAY {
			let first = currency.series(RateCategory::Fix).unwrap();
			let second = currency.series(RateCategory::Fix).unwrap();
			assert_eq!(first, second);
			assert!(!first.is_empty(), "{currency} has no FIX series");
		}
	}

	#[test]
	fn usd_resolves_per_category() {
		assert_eq!(catalog::USD.series(RateCategory::Fix).unwrap(), "SF43718");
		assert_eq!(
			catalog::USD.series(RateCategory::Settlement).unwrap(),
			"SF60653"
		);
	}

	#[test]
	fn settlement_rejected_without_settlement_series() {
		match catalog::EUR.series(RateCategory::Settlement) {
			Err(Error::UnsupportedRateCategory { currency, category }) => {
				assert_eq!(currency, "EUR");
				assert_eq!(category, RateCategory::Settlement);
			}
			other => panic!("expected UnsupportedRateCategory, got {other:?}"),
		}
	}

	#[test]
	fn from_code_is_case_insensitive() {
		assert_eq!(Currency::from_code("usd").unwrap(), catalog::USD);
		assert_eq!(Currency::from_code("JPY").unwrap(), catalog::JPY);
	}

	#[test]
	fn from_code_rejects_unknown_ids() {
		match Currency::from_code("XXX") {
			Err(Error::UnknownCurrency(code)) => assert_eq!(code, "XXX"),
			other => panic!("expected UnknownCurrency, got {other:?}"),
		}
	}

	#[test]
	fn catalog_ids_and_series_are_unique() {
		for (i, a) in catalog::ARRAY.iter().enumerate() {
			for b in &catalog::ARRAY[i + 1..] {
				assert_ne!(a.code(), b.code());
				assert_ne!(a.descriptor().series_fix, b.descriptor().series_fix);
			}
		}
	}

	#[test]
	fn category_codes() {
		assert_eq!(RateCategory::Fix.code(), "fix");
		assert_eq!(RateCategory::Settlement.code(), "settlement");
		assert_eq!(RateCategory::default(), RateCategory::Fix);
		assert_eq!("FIX".parse::<RateCategory>().unwrap(), RateCategory::Fix);
		assert!("spot".parse::<RateCategory>().is_err());
	}
}
