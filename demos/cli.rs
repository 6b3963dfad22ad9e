use banxico_sie::{Currency, Observation, RateCategory, SieClient};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct Cli {
	token: String,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	/// Rate for a single date (today when omitted).
	Rate {
		currency: Currency,
		date: Option<String>,
		#[clap(long, default_value = "fix")]
		category: RateCategory,
	},
	/// Rates over an inclusive date window.
	Range {
		currency: Currency,
		start: String,
		end: String,
		#[clap(long, default_value = "fix")]
		category: RateCategory,
	},
	/// The most recent available rate.
	Latest {
		currency: Currency,
		#[clap(long, default_value = "fix")]
		category: RateCategory,
	},
}

fn print_observation(observation: &Observation) {
	match observation.value {
		Some(value) => println!(
			"{} {} {}{}",
			observation.date, observation.currency, observation.symbol, value
		),
		None => println!("{} {} N/E", observation.date, observation.currency),
	}
}

fn main() {
	env_logger::init();
	let cli = Cli::parse();
	let client = SieClient::new(&cli.token).unwrap();

	match cli.command {
		CliCommand::Rate { currency, date, category } => {
			let rate = client.get_rate(currency, date.map(Into::into), category).unwrap();
			print_observation(&rate);
		}
		CliCommand::Range { currency, start, end, category } => {
			let rates = client
				.get_rates_range(currency, start.into(), end.into(), category)
				.unwrap();
			println!("{} observations", rates.len());
			for rate in &rates {
				print_observation(rate);
			}
		}
		CliCommand::Latest { currency, category } => {
			let latest = client.get_latest(currency, category).unwrap();
			print_observation(&latest);
		}
	}
}
