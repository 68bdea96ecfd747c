use clap::Parser;
use dotenvy::dotenv;
use inventory_buddy::{
    cli,
    config::{
        QuantityMode,
        app::{DEFAULT_CONFIG_PATH, load_config, load_config_or_default},
        database,
    },
    core::session::Session,
    errors::Result,
};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inventory-buddy")]
#[command(about = "Track product costs, prices, and profit from the terminal")]
struct Args {
    /// Configuration file (defaults to ./config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read-only known-product catalog URL (overrides LOOKUP_DATABASE_URL and config)
    #[arg(long)]
    lookup_url: Option<String>,

    /// Interpret quantities as units sold or units in stock
    #[arg(long, value_enum)]
    quantity_mode: Option<QuantityMode>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing on stderr so it never mixes with the table on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file, non-fatal
    dotenv().ok();

    let args = Args::parse();

    // 3. Load configuration; an explicit --config must exist
    let mut app_config = match &args.config {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
    .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    if let Some(mode) = args.quantity_mode {
        app_config.quantity_mode = mode;
    }
    info!(
        "Configuration loaded (quantity mode: {:?})",
        app_config.quantity_mode
    );

    // 4. Fetch known products once, before the form is ready
    let lookup_url =
        database::get_database_url(args.lookup_url, app_config.lookup.database_url.as_deref());
    let (known, notices) = cli::load_known_products(&app_config, lookup_url.as_deref()).await;

    let mut stdout = io::stdout().lock();
    for notice in &notices {
        writeln!(stdout, "{notice}")?;
    }

    // 5. Run the interactive session
    let mut session = Session::new(app_config.quantity_mode, known);
    cli::run(&mut session, &app_config, io::stdin().lock(), stdout)?;

    Ok(())
}
