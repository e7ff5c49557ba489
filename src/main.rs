use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ups_tracking::{
    TrackingClient,
    UPS_TEST_TRACKING_URL,
    config::Config,
    presenter::render_track_response,
};

const ENV_HELP: &str = "Environment variables:
  UPS_USERNAME, UPS_PASSWORD, UPS_ACCESS_KEY (required)
  UPS_TRACKING_URL, UPS_TIMEOUT_SECS (optional)";

#[derive(Parser)]
#[command(name = "ups-tracking")]
#[command(about = "Look up the activity history of a UPS package")]
#[command(after_help = ENV_HELP)]
struct Cli {
    /// UPS tracking number
    tracking_number: String,

    /// Query the UPS customer integration environment
    #[arg(long)]
    test_env: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("{}", ENV_HELP);
            std::process::exit(1);
        }
    };

    let mut client = TrackingClient::from_config(&config)?;
    if cli.test_env {
        client = client.with_endpoint(UPS_TEST_TRACKING_URL);
    }

    match client.track_activity(&cli.tracking_number).await {
        Ok(response) => {
            print!("{}", render_track_response(&response));
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
