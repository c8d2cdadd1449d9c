use eframe::egui::{
    self,
    containers,
};

use super::settings::SettingsData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Quit,
    About,
    ToggleDarkMode,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, settings: &SettingsData) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        action = Some(TopBarAction::Quit);
                    }
                });

                ui.menu_button("View", |ui| {
                    let theme_label = if settings.dark_mode { "Light Mode" } else { "Dark Mode" };
                    if ui.button(theme_label).clicked() {
                        action = Some(TopBarAction::ToggleDarkMode);
                    }
                    ui.separator();
                    if ui.button("Zoom In").clicked() {
                        action = Some(TopBarAction::ZoomIn);
                    }
                    if ui.button("Zoom Out").clicked() {
                        action = Some(TopBarAction::ZoomOut);
                    }
                    if ui.button("Reset Zoom").clicked() {
                        action = Some(TopBarAction::ResetZoom);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        action = Some(TopBarAction::About);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{:.0}%", settings.zoom * 100.0)).on_hover_text("Zoom");
                });
            });
        });

        action
    }
}
