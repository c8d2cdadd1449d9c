use alafrech::{
    exercises::ExerciseRegistry,
    gui::{
        app::{
            APP_NAME,
            WINDOW_TITLE,
        },
        settings::{
            SettingsData,
            SETTINGS_FILE,
        },
        FrenchPracticeApp,
    },
    persistence::load_json_or_default,
};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    let registry = ExerciseRegistry::default();
    log::info!("Starting {} with exercises: {:?}", APP_NAME, registry);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(FrenchPracticeApp::new(cc, &registry, settings_data)))),
    )
}
