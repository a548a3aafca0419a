use commit_composer::controller::StorePaths;
use commit_composer::gui::CommitApp;
use commit_composer::logging;
use commit_composer::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE);
    logging::init(settings.debug_logging);

    let download_dir =
        dirs_next::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Commit Composer",
        native_options,
        Box::new(move |_cc| Box::new(CommitApp::new(settings, StorePaths::default(), download_dir))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))?;
    Ok(())
}
