use clap::{Parser, Subcommand};

use medassist_advice::AdviceService;
use medassist_core::types::{AdviceQuery, Coordinates};

#[derive(Debug, Parser)]
#[command(name = "medassist")]
#[command(about = "Symptom-advice command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one symptom query and print the advice as JSON.
    Ask {
        /// Free-text symptom description.
        query: String,
        /// Latitude in degrees; with --lon, enables nearby-pharmacy lookup.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ask { query, lat, lon } => {
            let config = medassist_core::load_app_config_from_env()?;
            let service = AdviceService::from_config(&config)?;

            let user_location = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
                _ => None,
            };

            let result = service
                .advise(&AdviceQuery {
                    query,
                    user_location,
                })
                .await?;

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
