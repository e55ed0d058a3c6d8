// src/cli.rs
//
// Headless frontend over the same Session and the same stock.json as the GUI.

use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Report, Result};

use crate::{
    config::options::{AppOptions, StoreOptions},
    core::net::HttpSource,
    progress::Progress,
    session::Session,
};

#[derive(Parser, Debug)]
#[command(name = "etf_view", version, about = "Scrape Korean ETF snapshots into stock.json")]
pub struct Cli {
    /// Store file (default: stock.json next to the executable)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the stored table
    List,
    /// Scrape one page and append it (blank = default page)
    Fetch { url: Option<String> },
    /// Re-scrape every stored row by its code
    Update,
    /// Remove rows by zero-based position
    Delete {
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut options = AppOptions::default();
        if let Some(path) = &self.store {
            options.store = StoreOptions::at(path);
        }
        options.fetch.timeout = self.timeout.map(Duration::from_secs);
        options
    }
}

struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, position: usize, code: &str) {
        eprintln!("Updated {}/{}: {}", position + 1, self.total, code);
    }
    fn item_failed(&mut self, position: usize, code: &str) {
        eprintln!("Failed {}/{}: {}", position + 1, self.total, code);
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => ::log::LevelFilter::Info,
        1 => ::log::LevelFilter::Debug,
        _ => ::log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let options = cli.options();
    let source = HttpSource::new(&options.fetch)?;
    let (mut session, load_error) = Session::open(&options, Box::new(source));

    // Unlike the GUI, refuse to run on top of a file we could not read: the
    // next save would overwrite it.
    if let Some(e) = load_error {
        return Err(Report::new(e).wrap_err("store left untouched"));
    }

    match cli.command {
        Command::List => print_table(&session),
        Command::Fetch { url } => {
            let pos = session.fetch(url.as_deref().unwrap_or(""))?;
            let r = &session.store().records()[pos];
            println!("Fetched {} ({}) into row {}", r.name, r.code, pos);
        }
        Command::Update => {
            let mut progress = CliProgress { total: 0 };
            let n = session.update_all(Some(&mut progress))?;
            println!("Updated {n} row(s)");
        }
        Command::Delete { positions } => {
            let n = session.delete(&positions)?;
            println!("Deleted {n} row(s)");
        }
    }
    Ok(())
}

fn print_table(session: &Session) {
    let store = session.store();
    let header: Vec<&str> = store.columns().iter().map(|f| f.key()).collect();
    println!("#\t{}", header.join("\t"));
    for (i, r) in store.records().iter().enumerate() {
        println!("{i}\t{}", r.cells().join("\t"));
    }
}
