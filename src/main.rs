use anyhow::{Context, Result};

use seatmap_parser::{ExtractionConfig, SeatMapParser};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let parser = SeatMapParser::new(ExtractionConfig::default());
    parser
        .run()
        .await
        .with_context(|| format!("failed to produce {}", parser.config().output_path.display()))?;

    Ok(())
}
