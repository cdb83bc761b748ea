//! Backend status page.
//!
//! Mounts a single status controller, renders the loading page, issues the
//! one request to the backend hello endpoint and renders the final page.
//!
//! ```text
//!   config (TOML / --endpoint)
//!        │
//!        ▼
//!   StatusController ──GET──▶ backend /api/hello
//!        │ watch
//!        ▼
//!   view::render_page ──▶ stdout        diagnostics ──▶ stderr
//!        ▲
//!   Ctrl-C ──▶ Teardown (late response discarded)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use backend_status::config::{load_config, validate_config, AppConfig, ConfigError};
use backend_status::lifecycle::teardown_on_ctrl_c;
use backend_status::observability::init_logging;
use backend_status::view::render_page;
use backend_status::StatusController;

#[derive(Parser)]
#[command(name = "backend-status")]
#[command(about = "Check the backend connection and render its status", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the endpoint URL from the configuration.
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint.url = endpoint;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    let controller = Arc::new(StatusController::new(&config.endpoint)?);
    tracing::info!(
        controller = %controller.id(),
        endpoint = %controller.endpoint(),
        "Status controller mounted"
    );

    let mut updates = controller.subscribe();
    print!("{}", render_page(&updates.borrow_and_update()));

    let signal = tokio::spawn(teardown_on_ctrl_c(controller.teardown()));
    let request = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.initialize().await })
    };

    let status = request.await?;
    controller.dispose();
    signal.await?;

    if updates.has_changed()? {
        println!();
        print!("{}", render_page(&updates.borrow_and_update()));
    }

    tracing::info!(status = %status, "Done");
    Ok(())
}
