//! smite-overlay-replay - drive the in-game overlay from a recorded session.
//!
//! Reads host notifications as JSON lines (from a file or stdin), runs them
//! through the overlay controller and echoes both logs to the terminal.
//!
//! Usage: smite-overlay-replay [--input <file>] [--config <file>] [--catalog <dir>] [--search <name>] [--show-viewport]

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use smite_overlay_core::config::{catalog_dir, load_settings, load_settings_from};
use smite_overlay_core::{Catalog, InGameController, MemorySink};
use tracing_subscriber::filter::EnvFilter;

mod console;
mod host;
mod session;

use console::ConsoleSink;
use host::ReplayHost;

#[derive(Parser)]
#[command(version, about = "Replay recorded game telemetry through the in-game overlay")]
struct Cli {
    /// JSON-lines recording of host notifications (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing gods.json / items.json / builds.json
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List catalog gods whose name contains this text
    #[arg(long)]
    search: Option<String>,

    /// Key combination reported for the toggle hotkey
    #[arg(long, default_value = "Ctrl+F")]
    hotkey_text: String,

    /// Visible rows per log panel
    #[arg(long, default_value_t = 20)]
    rows: u32,

    /// Print what each panel's viewport shows once the replay ends
    #[arg(long)]
    show_viewport: bool,
}

/// Initialize logging, writing to SMITE_OVERLAY_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("SMITE_OVERLAY_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

const LINE_HEIGHT: f64 = 16.0;

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };

    let catalog_path = cli.catalog.clone().or_else(|| catalog_dir(&settings));
    if let Some(dir) = catalog_path.filter(|d| d.exists()) {
        let catalog = Catalog::load_dir(&dir)?;
        if let Some(query) = &cli.search {
            let mut stdout = io::stdout().lock();
            for god in catalog.search_gods(query) {
                let builds = catalog.builds_for(god.id).count();
                writeln!(stdout, "{:>6}  {} ({} builds)", god.id, god.name, builds)?;
            }
        }
    }

    let viewport = f64::from(cli.rows) * LINE_HEIGHT;
    let make_sink = |id: &str| {
        let memory = MemorySink::with_geometry(id, viewport, LINE_HEIGHT)
            .with_threshold(settings.autoscroll_threshold);
        ConsoleSink::new(memory, io::stdout())
    };

    let mut controller = InGameController::new(
        make_sink("eventsLog"),
        make_sink("infoLog"),
        ReplayHost::new(cli.hotkey_text.clone()),
        settings.clone(),
    );
    controller.start()?;

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let stats = session::replay(input, &mut controller)?;

    tracing::info!(
        dispatched = stats.dispatched,
        skipped = stats.skipped,
        host_errors = stats.host_errors,
        features = controller.host().features().len(),
        window = ?controller.host().state(),
        "Replay finished"
    );

    let mut stdout = io::stdout().lock();
    if let Some(text) = controller.hotkey_text() {
        writeln!(stdout, "toggle: {text}")?;
    }
    session::write_summary(&mut stdout, &[controller.events_log(), controller.info_log()])?;
    if cli.show_viewport {
        session::write_viewport(&mut stdout, controller.events_log().memory())?;
        session::write_viewport(&mut stdout, controller.info_log().memory())?;
    }
    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Replay failed");
        std::process::exit(1);
    }
}
