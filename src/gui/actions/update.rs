// src/gui/actions/update.rs
use eframe::egui;

use crate::{
    error::{Error, Result},
    gui::app::{App, Status},
    progress::Progress,
};

use super::JobKind;

pub fn update(app: &mut App, ctx: &egui::Context) {
    if app.busy() {
        return;
    }
    let total = app.rows().len();
    if total == 0 {
        app.set_status(Status::info("Nothing to update"));
        return;
    }

    logf!("UI: Update {total} row(s)");
    app.set_status(Status::info(format!("Updating {total} row(s)…")));

    super::spawn(app, ctx, JobKind::Update, |session, progress| {
        session.update_all(Some(progress as &mut dyn Progress))
    });
}

pub(super) fn finish(app: &mut App, result: Result<usize>) {
    match result {
        Ok(n) => app.set_status(Status::ok(format!("Updated {n} row(s) with today's data"))),
        Err(e) => {
            if let Error::PartialUpdate { position, .. } = &e {
                // Point at the row that failed.
                app.state.gui.selected_rows = vec![*position];
                app.state.gui.last_clicked = Some(*position);
            }
            app.set_status(Status::error(&e));
        }
    }
}
