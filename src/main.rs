//! main.rs
//! Entry point for ffm

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::NavState;
use crate::config::Config;
use crate::core::terminal;
use crate::utils::cli::{CliAction, handle_args};
use crate::utils::{logger, resolve_start_dir};

use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[ffm] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let path = match handle_args() {
        CliAction::RunAppAtPath(path) => path,
        CliAction::Exit => return ExitCode::SUCCESS,
    };

    let config = Config::load();

    let general = config.general();
    if let Err(e) = logger::init(general.log_file(), general.log_level()) {
        eprintln!("[ffm] Warning: logging disabled: {}", e);
    }

    let start = match resolve_start_dir(&path) {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("{e}");
            eprintln!("[ffm] Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("starting in {}", start.display());

    let mut nav = NavState::new(start, general.sort());
    match terminal::run_terminal(&mut nav, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("[ffm] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
