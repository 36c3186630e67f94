//! Console front end for the Taskline assistant.
//!
//! # Responsibility
//! - Wire configuration, logging and storage into one interactive session.
//! - Run the blocking read-eval loop over stdin/stdout.
//!
//! # Invariants
//! - A load failure at startup prints a shutdown notice and exits nonzero
//!   without entering the loop.
//! - Any per-command failure is printed as one message and the loop
//!   continues with state unchanged.
//! - End-of-input persists and says goodbye, same as an explicit `bye`.

mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use taskline_core::{
    core_version, default_log_level, init_logging, CommandError, FileTaskStore, Session,
};

const DATA_PATH_ENV: &str = "TASKLINE_DATA";
const LOG_DIR_ENV: &str = "TASKLINE_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKLINE_LOG_LEVEL";
const DEFAULT_DATA_PATH: &str = "data/taskline.txt";
const DEFAULT_LOG_SUBDIR: &str = "data/logs";

fn main() -> ExitCode {
    if let Err(message) = setup_logging() {
        // Logging is best-effort; the session works without file logs.
        eprintln!("note: file logging disabled: {message}");
    }
    log::info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let store = FileTaskStore::new(data_path());
    let mut session = match Session::start(store) {
        Ok(session) => session,
        Err(err) => {
            println!("{}", ui::load_failure(&err));
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_loop(stdin.lock(), stdout.lock(), &mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("console I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_loop<R, W>(input: R, mut output: W, session: &mut Session<FileTaskStore>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", ui::greeting())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(outcome) => writeln!(output, "{}", ui::outcome(&outcome))?,
            Err(err) => writeln!(output, "{}", ui::error(&err))?,
        }
        output.flush()?;
        if !session.is_running() {
            return Ok(());
        }
    }

    // End of input reached without `bye`.
    if let Err(err) = session.finish() {
        writeln!(output, "{}", ui::error(&CommandError::Storage(err)))?;
    }
    writeln!(output, "{}", ui::farewell())?;
    output.flush()
}

fn setup_logging() -> Result<(), String> {
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = match std::env::var(LOG_DIR_ENV) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?
            .join(DEFAULT_LOG_SUBDIR),
    };
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory is not valid UTF-8".to_string())?;
    init_logging(&level, log_dir)
}

fn data_path() -> PathBuf {
    std::env::var(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}
