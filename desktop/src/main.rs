//! MiniTweet desktop entry point.
//!
//! Wires configuration, logging, the persisted session, and the API client
//! together, then hands the [`App`] to eframe for the render loop.

use std::sync::Arc;
use std::time::Duration;

use desktop::app::App;
use desktop::config::Config;
use desktop::logging;
use desktop::services::api::ApiClient;
use desktop::session::SessionStore;
use desktop::ui;
use desktop::ui::theme::Theme;
use desktop::ui::widgets::notifications::NotificationManager;
use desktop::utils::runtime::TOKIO_RT;

const WINDOW_TITLE: &str = "MiniTweet";

fn main() -> eframe::Result<()> {
    // The guard must outlive the render loop so buffered file logs flush.
    let _log_guard = logging::init();

    let config = Config::from_env();
    tracing::info!(
        api_url = %config.api_url,
        session_file = %config.session_file.display(),
        "Starting MiniTweet desktop"
    );

    // Enter the runtime so handlers can `tokio::spawn` from the UI thread.
    let _runtime_guard = TOKIO_RT.enter();

    let session = SessionStore::load(&config.session_file);
    let api = Arc::new(ApiClient::new(config.api_url.clone(), session.clone()));
    let app = App::new(api, session);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(MiniTweetApp::new(app)))
        }),
    )
}

/// eframe shell around [`App`]: pumps pending events, then renders one frame.
struct MiniTweetApp {
    app: App,
    notifications: NotificationManager,
}

impl MiniTweetApp {
    fn new(app: App) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for MiniTweetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);
        // Keep polling for async results while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
