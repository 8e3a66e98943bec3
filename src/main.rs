use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::WriteLogger;
use std::{io, time::Duration};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Artwork catalog browser with cross-page row selection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/artview-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: ~/.config/artview/config.yaml, then ./config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog API base URL
    #[arg(long, env = "ARTVIEW_BASE_URL")]
    base_url: Option<String>,

    /// Page to open first
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

mod app;
mod handlers;
mod services;
mod ui;
mod utils;

use artview::api::ArticClient;
use artview::config::{self, Config};
use artview::model::Model;
use services::{ApiRequest, ApiResponse};

pub struct App {
    pub model: Model,

    api_tx: UnboundedSender<ApiRequest>,
    api_rx: UnboundedReceiver<ApiResponse>,
}

impl App {
    fn new(config: &Config, start_page: u32) -> Result<Self> {
        let client = ArticClient::new(config.base_url.clone(), config.page_size, config.timeout())?;
        info!(
            "Catalog at {} (page size {}, timeout {}s)",
            config.base_url,
            client.page_size(),
            config.timeout_secs
        );

        // Spawn API service worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        let mut app = App {
            model: Model::new(config.vim_mode),
            api_tx,
            api_rx,
        };

        app.load_page(start_page);

        Ok(app)
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let log_path = utils::get_debug_log_path();
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .context("Failed to install logger")?;
    debug!("Debug mode enabled, logging to {:?}", log_path);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Load configuration (defaults when no file exists)
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    // Initialize app
    let mut app = App::new(&config, args.page)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting with {} artworks selected", app.model.selection.len());

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Short poll so finished fetches show up promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
