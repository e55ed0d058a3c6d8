// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    gui::app::{Status, set_status},
    progress::Progress,
};

/// Progress sink for the worker thread: writes the shared status line and
/// nudges the UI to repaint.
pub struct GuiProgress {
    status: Arc<Mutex<Status>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<Status>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, status: Status) {
        set_status(&self.status, status);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        self.set_status(Status::info(msg));
    }

    fn item_done(&mut self, position: usize, code: &str) {
        self.done += 1;
        logd!("Update: row {} ({code}) refreshed", position + 1);
        self.set_status(Status::info(format!("Updating {}/{}: {code}", self.done, self.total)));
    }

    fn item_failed(&mut self, position: usize, code: &str) {
        logd!("Update: row {} ({code}) failed", position + 1);
    }
}
