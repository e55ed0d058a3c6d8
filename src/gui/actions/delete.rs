// src/gui/actions/delete.rs
use crate::gui::app::{App, Status};

pub fn delete(app: &mut App) {
    if app.busy() {
        return;
    }
    if app.state.gui.selected_rows.is_empty() {
        app.set_status(Status::info("Select rows to delete first"));
        return;
    }
    let positions = app.state.gui.selected_rows.clone();
    let Some(session) = app.session.as_mut() else { return };

    let result = session.delete(&positions);
    app.state.gui.clear_selection();
    app.edit = None;

    match result {
        Ok(n) => app.set_status(Status::ok(format!("Deleted {n} row(s)"))),
        Err(e) => {
            // Rows are gone from the table either way; only the file lags.
            loge!("Delete: {e}");
            app.set_status(Status::error(&e));
        }
    }
}
