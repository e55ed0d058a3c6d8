// src/bin/cli.rs
use etf_view::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
