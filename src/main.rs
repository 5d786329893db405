use std::path::PathBuf;
use anyhow::{anyhow, Result};
use log::info;

use themekeeper::ui::views::{spawn_repaint_bridge, DemoView};
use themekeeper::{AppConfig, AppContext};

const CONFIG_PATH: &str = "themekeeper.json";

struct DemoApp {
    view: DemoView,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.ui(ctx);
    }
}

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
    let config = AppConfig::load(&config_path)?;

    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();
    info!("Starting themekeeper demo...");

    // Storage tails and OS polling run here while the window owns the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let context = AppContext::from_config(config)?;
    let service = context.theme_service();

    let app_service = service.clone();
    eframe::run_native(
        "themekeeper",
        eframe::NativeOptions::default(),
        Box::new(move |cc: &eframe::CreationContext<'_>| {
            spawn_repaint_bridge(&app_service, cc.egui_ctx.clone());
            // Restore is deferred until after this first frame is set up
            app_service.start_observing();
            let app: Box<dyn eframe::App> = Box::new(DemoApp {
                view: DemoView::new(app_service),
            });
            app
        }),
    )
    .map_err(|e| anyhow!("Demo window failed: {}", e))?;

    runtime.block_on(context.shutdown());
    Ok(())
}
