use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use scinforge::{CorpusPipeline, PipelineConfig};

fn main() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = match PipelineConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            error!(error = %error, "failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(error) = config.validate() {
        error!(error = %error, "invalid configuration");
        std::process::exit(1);
    }

    match CorpusPipeline::new(config).run() {
        Ok(summary) => {
            info!(
                joined_rows = summary.joined_rows,
                image_records = summary.image_records,
                close_up_records = summary.close_up_records,
                qa_records = summary.qa_records,
                conversations = summary.conversations_written,
                images_copied = summary.images_copied,
                images_failed = summary.images_failed,
                "corpus build complete"
            );
        }
        Err(error) => {
            error!(error = %error, "corpus build failed");
            std::process::exit(1);
        }
    }
}
