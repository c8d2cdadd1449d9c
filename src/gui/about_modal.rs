use eframe::egui;

pub const ABOUT_TITLE: &str = "About aLaFrech";
pub const ABOUT_MESSAGE: &str = "Practice French vocabulary and conjugations with a friendly GUI.\n\
                                 Developed as a modular example app.";

#[derive(Default)]
pub struct AboutModal {
    open: bool,
}

impl AboutModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("about_modal")).show(ctx, |ui| {
            ui.set_width(340.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("ℹ").size(22.0).color(egui::Color32::LIGHT_BLUE));
                ui.label(egui::RichText::new(ABOUT_TITLE).size(16.0).strong());
            });

            ui.add_space(8.0);
            ui.label(ABOUT_MESSAGE);
            ui.small(format!("Version {}", env!("CARGO_PKG_VERSION")));

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}
