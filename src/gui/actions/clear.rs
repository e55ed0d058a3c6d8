// src/gui/actions/clear.rs
use crate::gui::app::{App, Status};

/// Empty the URL box. The table and stock.json are left alone.
pub fn clear(app: &mut App) {
    if app.running {
        return;
    }
    match &app.session {
        Some(session) => session.clear_input(&mut app.state.gui.url_input),
        None => app.state.gui.url_input.clear(),
    }
    app.set_status(Status::ok("Input cleared"));
}
