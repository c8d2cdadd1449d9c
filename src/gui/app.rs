use eframe::egui;

use super::{
    about_modal::AboutModal,
    conjugation_tab::ConjugationTab,
    error_modal::ErrorModal,
    flashcard_tab::FlashcardTab,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    exercises::{
        ExerciseInstance,
        ExerciseRegistry,
    },
    persistence::save_json,
};

pub const APP_NAME: &str = "aLaFrech";
pub const WINDOW_TITLE: &str = "aLaFrech - French Practice";

pub enum ExerciseTab {
    Flashcards { name: String, view: FlashcardTab },
    Conjugation { name: String, view: ConjugationTab },
}

impl ExerciseTab {
    pub fn from_instance(name: &str, instance: ExerciseInstance) -> Self {
        match instance {
            ExerciseInstance::Flashcards(exercise) => ExerciseTab::Flashcards {
                name: name.to_string(),
                view: FlashcardTab::new(name, exercise),
            },
            ExerciseInstance::Conjugation(exercise) => ExerciseTab::Conjugation {
                name: name.to_string(),
                view: ConjugationTab::new(name, exercise),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ExerciseTab::Flashcards { name, .. } | ExerciseTab::Conjugation { name, .. } => name,
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        match self {
            ExerciseTab::Flashcards { view, .. } => view.show(ui, theme),
            ExerciseTab::Conjugation { view, .. } => view.show(ui, theme),
        }
    }
}

/// One tab per registered exercise, in registration order.
pub fn build_tabs(registry: &ExerciseRegistry, error_modal: &mut ErrorModal) -> Vec<ExerciseTab> {
    let mut tabs = Vec::new();
    for name in registry.names() {
        match registry.create(name) {
            Ok(instance) => tabs.push(ExerciseTab::from_instance(name, instance)),
            Err(e) => {
                log::error!("Skipping exercise tab '{}': {}", name, e);
                error_modal.show_error("Exercise unavailable", e.to_string(), None);
            }
        }
    }
    tabs
}

pub struct FrenchPracticeApp {
    pub tabs: Vec<ExerciseTab>,
    pub active_tab: usize,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,

    // Modals
    pub about_modal: AboutModal,
    pub error_modal: ErrorModal,
}

impl FrenchPracticeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        registry: &ExerciseRegistry,
        settings_data: SettingsData,
    ) -> Self {
        let mut error_modal = ErrorModal::new();
        let tabs = build_tabs(registry, &mut error_modal);
        log::info!("Loaded {} exercise tabs", tabs.len());

        let app = Self {
            tabs,
            active_tab: 0,
            settings_data,
            theme: Theme::dracula(),
            about_modal: AboutModal::default(),
            error_modal,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        apply_dark_mode(&cc.egui_ctx, app.settings_data.dark_mode);
        cc.egui_ctx.set_zoom_factor(app.settings_data.zoom);

        app
    }

    fn handle_top_bar_action(&mut self, ctx: &egui::Context, action: TopBarAction) {
        match action {
            TopBarAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            TopBarAction::About => self.about_modal.open(),
            TopBarAction::ToggleDarkMode => {
                self.settings_data.dark_mode = !self.settings_data.dark_mode;
                apply_dark_mode(ctx, self.settings_data.dark_mode);
                self.save_settings();
            }
            TopBarAction::ZoomIn | TopBarAction::ZoomOut | TopBarAction::ResetZoom => {
                match action {
                    TopBarAction::ZoomIn => self.settings_data.zoom_in(),
                    TopBarAction::ZoomOut => self.settings_data.zoom_out(),
                    _ => self.settings_data.reset_zoom(),
                }
                ctx.set_zoom_factor(self.settings_data.zoom);
                self.save_settings();
            }
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::error!("Failed to save settings: {}", e);
            self.error_modal.show_error(
                "Settings not saved",
                "Your display preferences could not be written to disk.",
                Some(e.to_string()),
            );
        }
    }

    fn show_tab_strip(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_strip").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, tab) in self.tabs.iter().enumerate() {
                    ui.selectable_value(&mut self.active_tab, index, tab.name());
                }
            });
        });
    }
}

impl eframe::App for FrenchPracticeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, &self.settings_data) {
            self.handle_top_bar_action(ctx, action);
        }

        self.show_tab_strip(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.tabs.get_mut(self.active_tab) {
                Some(tab) => tab.show(ui, &self.theme),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("No exercises available")
                                .color(self.theme.muted(ui.ctx())),
                        );
                    });
                }
            }
        });

        self.about_modal.show(ctx);
        self.error_modal.show(ctx);
    }
}
