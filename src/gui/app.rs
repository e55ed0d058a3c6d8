// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, options::AppOptions, state::AppState},
    core::net::HttpSource,
    record::{Field, Record},
    session::Session,
};

use super::{actions, components, fonts};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();

    let log_path = state.options.store.log_path();
    if let Err(e) = crate::log::init_file(&log_path) {
        eprintln!("Logging disabled ({}): {e}", log_path.display());
    }
    logf!("Init: store={}", state.options.store.path().display());

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, state)))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Ok,
    Error,
}

#[derive(Clone, Debug)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self { Self { text: text.into(), tone: Tone::Info } }
    pub fn ok(text: impl Into<String>) -> Self { Self { text: text.into(), tone: Tone::Ok } }

    pub fn error(e: &crate::Error) -> Self {
        Self { text: format!("{}: {e}", e.label()), tone: Tone::Error }
    }
}

/// Write to a status cell shared with worker threads. A poisoned lock still
/// holds a usable String, so take it.
pub fn set_status(cell: &Mutex<Status>, status: Status) {
    *cell.lock().unwrap_or_else(|p| p.into_inner()) = status;
}

/// A cell being edited in place.
pub struct CellEdit {
    pub row: usize,
    pub field: Field,
    pub text: String,
    /// Grab keyboard focus on the next frame.
    pub focus: bool,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None while a worker thread holds it, or if setup failed
    pub session: Option<Session>,

    // rows shown while the session is away
    pub snapshot: Vec<Record>,

    // status line (workers write here)
    pub status: Arc<Mutex<Status>>,
    pub running: bool,
    pub job: Option<actions::Job>,

    pub edit: Option<CellEdit>,
}

/// Build a session from disk. Load problems become the first status line.
pub fn open_session(options: &AppOptions) -> (Option<Session>, Status) {
    let source = match HttpSource::new(&options.fetch) {
        Ok(s) => s,
        Err(e) => {
            loge!("Init: {e}");
            return (None, Status::error(&e));
        }
    };

    let (session, load_error) = Session::open(options, Box::new(source));
    let status = match load_error {
        Some(e) => {
            let mut st = Status::error(&e);
            st.text.push_str(" (starting with an empty table)");
            st
        }
        None if session.store().is_empty() => Status::info("Idle"),
        None => Status::info(format!("Loaded {} row(s)", session.store().len())),
    };
    (Some(session), status)
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        fonts::install(&cc.egui_ctx);

        let (session, status) = open_session(&state.options);
        logf!("Init: {}", status.text);

        Self {
            state,
            session,
            snapshot: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
            edit: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    /// Rows on screen: the live table, or the snapshot while a worker runs.
    #[inline]
    pub fn rows(&self) -> &[Record] {
        rows_of(&self.session, &self.snapshot)
    }

    #[inline]
    pub fn columns(&self) -> &'static [Field] {
        match &self.session {
            Some(s) => s.store().columns(),
            None => &Field::ALL,
        }
    }

    /// Mutating controls are off while a worker runs or without a session.
    #[inline]
    pub fn busy(&self) -> bool {
        self.running || self.session.is_none()
    }

    #[inline]
    pub fn set_status(&self, status: Status) {
        set_status(&self.status, status);
    }

    pub fn status_snapshot(&self) -> Status {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

pub fn rows_of<'a>(session: &'a Option<Session>, snapshot: &'a [Record]) -> &'a [Record] {
    match session {
        Some(s) => s.store().records(),
        None => snapshot,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::footer::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_buttons::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });

        // Workers repaint when they finish, but the join is only visible once
        // the thread has actually exited.
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
