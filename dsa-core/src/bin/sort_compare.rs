use dsa_core::sorting::compare::{ComparisonConfig, run_comparison};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ComparisonConfig::default();
    config.validate()?;

    tracing::info!(
        "Comparing {} algorithms on {} random values",
        config.algorithms.len(),
        config.size
    );

    let report = run_comparison(&config)?;
    report.log_summary();

    println!("{}", report.to_json()?);

    Ok(())
}
