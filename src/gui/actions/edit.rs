// src/gui/actions/edit.rs
use crate::{
    gui::app::{App, CellEdit, Status},
    record::Field,
};

pub fn begin_edit(app: &mut App, row: usize, field: Field) {
    if app.busy() {
        return;
    }
    commit_edit(app);
    let Some(text) = app.rows().get(row).map(|r| s!(r.get(field))) else { return };
    app.edit = Some(CellEdit { row, field, text, focus: true });
}

/// Write the open edit (if any) to the table and the file.
pub fn commit_edit(app: &mut App) {
    let Some(edit) = app.edit.take() else { return };
    let Some(session) = app.session.as_mut() else { return };

    match session.edit(edit.row, edit.field, &edit.text) {
        Ok(true) => app.set_status(Status::ok(format!("Saved {} of row {}", edit.field, edit.row + 1))),
        Ok(false) => {}
        Err(e) => {
            loge!("Edit: {e}");
            app.set_status(Status::error(&e));
        }
    }
}

pub fn cancel_edit(app: &mut App) {
    app.edit = None;
}
