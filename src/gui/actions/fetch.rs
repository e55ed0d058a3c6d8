// src/gui/actions/fetch.rs
use eframe::egui;

use crate::{
    error::Result,
    gui::app::{App, Status},
};

use super::JobKind;

pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.busy() {
        return;
    }
    let input = app.state.gui.url_input.clone();
    let url = app.state.options.fetch.resolve_url(&input);

    logf!("UI: Fetch → {url}");
    app.set_status(Status::info(format!("Fetching {url}…")));

    super::spawn(app, ctx, JobKind::Fetch, move |session, _| session.fetch(&input));
}

pub(super) fn finish(app: &mut App, result: Result<usize>) {
    match result {
        Ok(pos) => {
            if let Some(session) = &app.session {
                session.clear_input(&mut app.state.gui.url_input);
            }
            let msg = match app.rows().get(pos) {
                Some(r) => format!("Fetched {} ({})", r.name, r.code),
                None => s!("Fetched"),
            };
            app.set_status(Status::ok(msg));
        }
        Err(e) => {
            loge!("Fetch: {e}");
            app.set_status(Status::error(&e));
        }
    }
}
