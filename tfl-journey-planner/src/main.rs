use std::env;

use tfl_journey_planner::cache::{CacheConfig, CachedJourneyClient};
use tfl_journey_planner::tfl::{JourneyClient, TflConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <from> <to>", args[0]);
        eprintln!("  e.g. {} \"tw14 9nt\" \"tw14 8ex\"", args[0]);
        std::process::exit(2);
    }
    let (from, to) = (&args[1], &args[2]);

    // Get credentials from environment; the API serves anonymous
    // requests at a reduced rate.
    let app_id = env::var("TFL_APP_ID").unwrap_or_else(|_| {
        eprintln!("Warning: TFL_APP_ID not set. Requests run at the anonymous rate.");
        String::new()
    });
    let app_key = env::var("TFL_APP_KEY").unwrap_or_default();

    let config = TflConfig::new(app_id, app_key);
    let client = JourneyClient::new(config).expect("Failed to create journey client");
    let cached = CachedJourneyClient::new(client, &CacheConfig::default());

    match cached.get_journeys(from, to).await {
        Ok(journeys) => {
            if journeys.is_empty() {
                println!("No journeys found between {from} and {to}.");
                return;
            }

            for (i, journey) in journeys.iter().enumerate() {
                println!("Journey {} (departs {}):", i + 1, journey.start_date_time());
                for instruction in journey.instructions() {
                    println!("  {instruction}");
                }
                println!(
                    "  {:.0} m, {} s, {} map points",
                    journey.total_distance_metres(),
                    journey.total_duration_seconds(),
                    journey.map_path().len()
                );
                println!();
            }
        }
        Err(e) => {
            eprintln!("Journey planning failed: {e}");
            std::process::exit(1);
        }
    }
}
