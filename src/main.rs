use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use folio::app::config::{self, AppConfig};
use folio::app::navigation::ActionNavigator;
use folio::app::r#loop::{run_loop, ActionChannel};
use folio::app::state::{AppState, ThemeState};
use folio::infrastructure::catalog_file::{self, CatalogSource};
use folio::infrastructure::logging;
use folio::theme::PaletteType;

/// Terminal portfolio with a keyboard-driven command palette.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Catalog TOML file to load instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<PaletteType>,

    /// Config file [default: ~/.config/folio/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file [default: ~/.config/folio/folio.log]
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not reload the catalog when its file changes
    #[arg(long)]
    no_watch: bool,
}

impl Cli {
    /// Flags win over the config file.
    fn merge(self, mut config: AppConfig) -> AppConfig {
        if let Some(catalog) = self.catalog {
            config.catalog = Some(catalog);
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = Some(log_file);
        }
        if self.no_watch {
            config.watch_catalog = false;
        }
        config
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let file_config = config::load_config(cli.config.as_deref())?;
    let config = cli.merge(file_config);

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(config::default_log_path);
    logging::init(&log_path)?;

    // Load the catalog BEFORE terminal setup so a bad file is reported on a
    // normal terminal.
    let (catalog, source) = match &config.catalog {
        Some(path) => (
            catalog_file::load_catalog(path)?,
            CatalogSource::File(path.clone()),
        ),
        None => (
            catalog_file::builtin_catalog().context("built-in catalog is invalid")?,
            CatalogSource::BuiltIn,
        ),
    };
    tracing::info!(
        source = %source.label(),
        items = catalog.items().len(),
        theme = config.theme.label(),
        "starting folio"
    );

    let watch_path = match &source {
        CatalogSource::File(path) if config.watch_catalog => Some(path.clone()),
        _ => None,
    };

    let actions = ActionChannel::new();
    let app_state = AppState::new(
        Arc::new(catalog),
        source,
        ActionNavigator::new(actions.tx.clone()),
        &config.keys,
        ThemeState::new(config.theme),
    );

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, actions, watch_path).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    res
}
