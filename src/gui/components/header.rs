// src/gui/components/header.rs
use eframe::egui::{self, Color32, RichText};

use crate::config::consts::{DESCRIPTION, HEADING};

const LIGHT_BLUE: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);

pub fn draw(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(4.0);
        ui.heading(RichText::new(HEADING).size(22.0).strong());
        ui.label(RichText::new(DESCRIPTION).color(LIGHT_BLUE));
        ui.add_space(4.0);
    });
}
