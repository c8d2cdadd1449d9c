use eframe::egui::{
    self,
    text::{
        CCursor,
        CCursorRange,
    },
};

/// Row of buttons that type accented characters into a linked text field.
pub struct AccentToolbar {
    characters: &'static [&'static str],
}

impl AccentToolbar {
    pub fn new(characters: &'static [&'static str]) -> Self {
        Self { characters }
    }

    pub fn characters(&self) -> &'static [&'static str] {
        self.characters
    }

    pub fn show(&self, ui: &mut egui::Ui, target: egui::Id, text: &mut String) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            for &character in self.characters {
                let button = egui::Button::new(character).min_size(egui::vec2(24.0, 0.0));
                if ui.add(button).clicked() {
                    insert_at_cursor(ui.ctx(), target, text, character);
                }
            }
        });
    }
}

/// Inserts `value` where the field's cursor was and gives focus back to the field.
pub fn insert_at_cursor(ctx: &egui::Context, target: egui::Id, text: &mut String, value: &str) {
    let mut state = egui::TextEdit::load_state(ctx, target).unwrap_or_default();
    let char_index = state
        .cursor
        .char_range()
        .map(|range| range.primary.index)
        .unwrap_or_else(|| text.chars().count());

    let cursor = insert_at_char(text, char_index, value);
    state.cursor.set_char_range(Some(CCursorRange::one(CCursor::new(cursor))));
    state.store(ctx, target);
    ctx.memory_mut(|mem| mem.request_focus(target));
}

/// Inserts at a character (not byte) position, clamped to the end.
/// Returns the character position just after the inserted text.
pub fn insert_at_char(text: &mut String, char_index: usize, value: &str) -> usize {
    let byte_index =
        text.char_indices().nth(char_index).map(|(index, _)| index).unwrap_or(text.len());
    text.insert_str(byte_index, value);
    text[..byte_index].chars().count() + value.chars().count()
}
