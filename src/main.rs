use anyhow::{Context, Result};
use docshell::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let summary = docshell::generate_site(&config).context("Failed to generate site")?;

    println!(
        "Generated {} pages ({} printable) in {}",
        summary.pages,
        summary.printable,
        config.output.display()
    );

    if config.open {
        let index_path = config.output.join("index.html");
        if index_path.exists() {
            info!(path = %index_path.display(), "Opening in browser");
            if let Err(e) = open::that(&index_path) {
                warn!(error = %e, "Failed to open browser");
            }
        } else {
            warn!(path = %index_path.display(), "No index page to open");
        }
    }

    Ok(())
}
