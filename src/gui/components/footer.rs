// src/gui/components/footer.rs
use eframe::egui::{self, Align, Color32, Layout, RichText};

use crate::{config::consts::{CREDIT, SAMPLE_CODE}, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let sample = app.state.options.fetch.url_for_code(SAMPLE_CODE);

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("URL : {sample}")).color(Color32::YELLOW).small());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(CREDIT).color(Color32::YELLOW).small());
        });
    });
}
