use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{collections::HashMap, io, time::Duration};
use tokio::sync::mpsc;

/// Search and browse remote images in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (imgsearch-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Search for this immediately on startup
    #[arg(short, long)]
    query: Option<String>,
}

mod app;
mod handlers;
mod logging;
mod ui;
mod utils;

use imgsearch::api::{ImageVariant, UnsplashClient};
use imgsearch::config::{self, Config};
use imgsearch::logic::layout::GridGeometry;
use imgsearch::model;
use imgsearch::services;

/// Cache key for a decoded image
pub type ImageKey = (String, ImageVariant);

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        dimensions: (u32, u32),
    },
    Failed {
        reason: String,
    },
}

impl ImagePreviewState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ImagePreviewState::Loading)
    }
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { dimensions, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("dimensions", dimensions)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { reason } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Decoded image coming back from a background task
pub struct ImageUpdate {
    pub key: ImageKey,
    pub state: ImagePreviewState,
}

pub struct App {
    pub model: model::Model,

    api_tx: mpsc::UnboundedSender<services::ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<services::ApiResponse>,
    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: mpsc::UnboundedSender<ImageUpdate>,
    image_update_rx: mpsc::UnboundedReceiver<ImageUpdate>,

    /// Decoded images by (item id, variant); not Clone, so kept out of Model
    image_state_map: HashMap<ImageKey, ImagePreviewState>,

    /// Grid geometry of the last rendered frame
    grid: Option<GridGeometry>,

    /// Clickable regions of the last rendered frame
    hit_map: ui::layout::HitMap,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let client = UnsplashClient::new(
            config.base_url.clone(),
            config.access_key.clone(),
            config.per_page,
            config.request_timeout(),
        )
        .context("Failed to build HTTP client")?;

        // Spawn API service worker
        let (api_tx, api_rx) = services::spawn_api_service(client);

        // Create channel for decoded images
        let (image_update_tx, image_update_rx) = mpsc::unbounded_channel();

        let image_picker = if config.image_preview_enabled {
            Some(Self::create_picker(&config.image_protocol))
        } else {
            tracing::debug!("image previews disabled in config");
            None
        };

        Ok(Self {
            model: model::Model::new(config.vim_mode, config.toast_duration()),
            api_tx,
            api_rx,
            image_picker,
            image_update_tx,
            image_update_rx,
            image_state_map: HashMap::new(),
            grid: None,
            hit_map: ui::layout::HitMap::default(),
        })
    }

    fn create_picker(protocol: &str) -> ratatui_image::picker::Picker {
        use ratatui_image::picker::{Picker, ProtocolType};

        let mut picker = match Picker::from_query_stdio() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "failed to detect terminal graphics, using fallback font size");
                Picker::from_fontsize((8, 16))
            }
        };

        match protocol.to_lowercase().as_str() {
            "auto" => tracing::debug!("image protocol: auto-detected"),
            "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
            "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
            "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
            "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
            unknown => tracing::debug!(protocol = unknown, "unknown image protocol, using auto-detect"),
        }

        picker
    }

    fn send(&self, request: services::ApiRequest) {
        if self.api_tx.send(request).is_err() {
            tracing::debug!("api service is gone, request dropped");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        logging::init_debug_logging()?;
        tracing::debug!("debug mode enabled");
    }

    let config_path = config::get_config_path(args.config)?;
    tracing::debug!(path = %config_path.display(), "loading config");
    let mut config = Config::load(&config_path)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(&config)?;

    if let Some(query) = args.query {
        app.model.search.input = query;
        app.submit_search();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Clear terminal to remove sixel graphics left behind by a closed modal
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Process decoded images from background tasks (non-blocking)
        while let Ok(update) = app.image_update_rx.try_recv() {
            app.handle_image_update(update);
        }

        // Short poll keeps the loader animation moving
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
