use clap::Parser;
use pacrunch_domain::CliOverrides;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "pacrunch")]
#[command(version)]
#[command(about = "pacrunch - Palo Alto firewall log cruncher")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Input CSV file (overrides `input`)
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<String>,

    /// Output CSV file (overrides `output`)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Force debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input: cli.input,
        output: cli.output,
        log_level: cli.log_level,
        debug: cli.debug,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting pacrunch v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config);
    debug!(
        resolver = %services.resolver.active,
        override_rejected = services.resolver.warning.is_some(),
        "Resolver in effect"
    );

    let report = services.crunch_log.execute(&config).await?;

    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        columns_removed = report.columns_removed(),
        duplicate_rows_removed = report.duplicate_rows_removed,
        "Program completed successfully"
    );

    if let Some(stats) = &report.enrichment {
        info!(
            resolved = stats.resolved,
            unresolved = stats.unresolved,
            memo_hits = stats.memo_hits,
            "Hostname enrichment summary"
        );
    }

    Ok(())
}
