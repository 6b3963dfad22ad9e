use banxico_sie::{catalog, RateCategory, SieClient};

fn main() {
	env_logger::init();
	let token = std::env::args().nth(1).expect("usage: latest <token>");
	let client = SieClient::new(&token).unwrap();
	let rate = client.get_latest(catalog::USD, RateCategory::Fix).unwrap();
	match rate.value {
		Some(value) => println!("{} {}: {}{}", rate.date, rate.currency, rate.symbol, value),
		None => println!("{} {}: not published", rate.date, rate.currency),
	}
}
