// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul. Borrow a system CJK font if one is
// installed; otherwise Korean text renders as boxes but nothing breaks.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const FONT_NAME: &str = "hangul";

const CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn install(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        logf!("Fonts: no Hangul font found, using defaults");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));

    // Fallback after the defaults so Latin text keeps its look.
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(FONT_NAME));
    }

    ctx.set_fonts(fonts);
    logf!("Fonts: Hangul fallback from {path}");
}
