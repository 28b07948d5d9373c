use eframe::egui;
use tracing::{
    error,
    info,
};
use wordbook::{
    gui::{
        settings::SettingsData,
        WordbookApp,
    },
    logging,
};

fn main() -> eframe::Result {
    let _log_guard = match logging::init() {
        Ok(guard) => {
            info!(log_file = %guard.log_file.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    let settings = SettingsData::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordbook")
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Wordbook",
        options,
        Box::new(|cc| Ok(Box::new(WordbookApp::new(cc, settings)?))),
    );

    if let Err(e) = &result {
        error!(error = %e, "application exited with an error");
    }

    result
}
