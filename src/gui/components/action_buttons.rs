// src/gui/components/action_buttons.rs

use eframe::egui::{self, Color32, Key, RichText, widgets::Spinner};

use crate::gui::{
    actions,
    app::{App, Tone},
};

// Pastel fills with dark text; readable on both light and dark themes.
const FETCH_FILL: Color32 = Color32::from_rgb(0xB5, 0xE7, 0xA0);
const UPDATE_FILL: Color32 = Color32::from_rgb(0xA0, 0xC4, 0xFF);
const DELETE_FILL: Color32 = Color32::from_rgb(0xFF, 0xAD, 0xAD);
const CLEAR_FILL: Color32 = Color32::from_rgb(0xFF, 0xE5, 0xA0);

fn pastel(text: &str, fill: Color32) -> egui::Button<'_> {
    egui::Button::new(RichText::new(text).color(Color32::BLACK).strong()).fill(fill)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let enabled = !app.busy();

    // --- URL input; Enter fetches ---
    ui.horizontal(|ui| {
        ui.label("URL:");
        let placeholder = format!("blank = {}", app.state.options.fetch.default_url);
        let resp = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut app.state.gui.url_input)
                .hint_text(placeholder)
                .desired_width(f32::INFINITY),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            logd!("UI: Enter in URL box");
            actions::fetch(app, &ctx);
        }
    });

    // --- Fetch / Update / Delete / Clear ---
    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, pastel("Fetch", FETCH_FILL)).clicked() {
            actions::fetch(app, &ctx);
        }
        if ui.add_enabled(enabled, pastel("Update", UPDATE_FILL)).clicked() {
            actions::update(app, &ctx);
        }

        let can_delete = enabled && !app.state.gui.selected_rows.is_empty();
        if ui
            .add_enabled(can_delete, pastel("Delete", DELETE_FILL))
            .on_disabled_hover_text("Select rows first")
            .clicked()
        {
            actions::delete(app);
        }

        if ui.add_enabled(!app.running, pastel("Clear", CLEAR_FILL)).clicked() {
            actions::clear(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status_snapshot();
        let text = RichText::new(status.text);
        ui.label(match status.tone {
            Tone::Info => text,
            Tone::Ok => text.color(Color32::from_rgb(0x4C, 0xAF, 0x50)),
            Tone::Error => text.color(Color32::from_rgb(0xDC, 0x61, 0x49)),
        });
    });
}
