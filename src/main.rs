// Prints the home screen job feed as JSON.
//
// Usage: spotless-feed [--file <jobs.json>]
// Without --file, jobs are fetched from SPOTLESS_API_BASE_URL.

use anyhow::{bail, Context};
use spotless_lib::shared::{config::load_dotenv, utils::init_logger, AppConfig};
use spotless_lib::{build_job_feed_service, FeedOrigin};

fn parse_origin(mut args: impl Iterator<Item = String>) -> anyhow::Result<FeedOrigin> {
    match args.next().as_deref() {
        None => Ok(FeedOrigin::Api),
        Some("--file") => match args.next() {
            Some(path) => Ok(FeedOrigin::File(path.into())),
            None => bail!("--file requires a path"),
        },
        Some(other) => bail!(
            "unexpected argument '{}'\nusage: spotless-feed [--file <jobs.json>]",
            other
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG may come from .env
    let dotenv_path = load_dotenv();
    init_logger();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded environment from {}", path.display());
    }

    let origin = parse_origin(std::env::args().skip(1))?;
    let config = AppConfig::from_env().context("failed to load configuration")?;
    let service = build_job_feed_service(&config, origin).context("failed to build job feed")?;

    let feed = service.job_feed().await.context("failed to load jobs")?;
    println!("{}", serde_json::to_string_pretty(&feed)?);

    Ok(())
}
