// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Fetch and Update go to a worker thread, which borrows the session for the
// duration; Delete, Clear and cell edits are quick and run in place.

mod clear;   // src/gui/actions/clear.rs
mod delete;  // src/gui/actions/delete.rs
mod edit;    // src/gui/actions/edit.rs
mod fetch;   // src/gui/actions/fetch.rs
mod update;  // src/gui/actions/update.rs

pub use clear::clear;
pub use delete::delete;
pub use edit::{begin_edit, cancel_edit, commit_edit};
pub use fetch::fetch;
pub use update::update;

use std::thread::{self, JoinHandle};

use eframe::egui;

use crate::{
    error::Result,
    gui::{
        app::{App, Status, open_session},
        progress::GuiProgress,
    },
    session::Session,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Fetch,
    Update,
}

pub struct Job {
    kind: JobKind,
    handle: JoinHandle<(Session, Result<usize>)>,
}

/// Hand the session to a worker running `work`. The UI keeps showing a copy
/// of the rows and stays disabled until `poll` takes the session back.
fn spawn<F>(app: &mut App, ctx: &egui::Context, kind: JobKind, work: F)
where
    F: FnOnce(&mut Session, &mut GuiProgress) -> Result<usize> + Send + 'static,
{
    if app.running {
        return;
    }
    // An open cell edit would otherwise be lost with the session gone.
    commit_edit(app);

    let Some(mut session) = app.session.take() else { return };
    app.snapshot = session.store().records().to_vec();
    app.running = true;

    let status = app.status.clone();
    let ctx = ctx.clone();
    let handle = thread::spawn(move || {
        let mut progress = GuiProgress::new(status, ctx.clone());
        let result = work(&mut session, &mut progress);
        ctx.request_repaint();
        (session, result)
    });

    logd!("Worker: {kind:?} started");
    app.job = Some(Job { kind, handle });
}

/// Called every frame: collect a finished worker and report its outcome.
pub fn poll(app: &mut App) {
    if !app.job.as_ref().is_some_and(|j| j.handle.is_finished()) {
        return;
    }
    let Some(job) = app.job.take() else { return };
    app.running = false;
    app.snapshot.clear();

    match job.handle.join() {
        Ok((session, result)) => {
            app.session = Some(session);
            match job.kind {
                JobKind::Fetch => fetch::finish(app, result),
                JobKind::Update => update::finish(app, result),
            }
        }
        Err(_) => {
            // The session died with the thread; start over from the file.
            loge!("Worker: {:?} panicked, reloading store", job.kind);
            let (session, _) = open_session(&app.state.options);
            app.session = session;
            app.state.gui.clear_selection();
            app.set_status(Status {
                text: s!("Internal error; table reloaded from disk"),
                tone: crate::gui::app::Tone::Error,
            });
        }
    }
}
