//! lsel entrypoint: page through stdin, print the chosen line's prefix.
//!
//! Exit status 0 when a line was selected (its text before the first `:` is
//! written to stdout), 1 on cancel, on an empty selection or on any error.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{DispatchOptions, SelectionResult};
use core_terminal::CrosstermSurface;
use core_text::Document;
use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

mod session;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "lsel", version, about = "Select a line of stdin in a full-screen pager")]
struct Args {
    /// Name shown in the status line (e.g. the file the input came from).
    #[arg(long)]
    pub label: Option<String>,
    /// Optional configuration file (TOML).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write logs to this file; filtered with `RUST_LOG`.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = match configure_logging(args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("lsel: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    install_panic_hook();
    info!(target: "runtime", "startup");

    let outcome = run(&args).and_then(|result| report(&result, &mut io::stdout().lock()));
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(target: "runtime", error = %format!("{err:#}"), "session_failed");
            eprintln!("lsel: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SelectionResult> {
    let input = read_input(&mut io::stdin().lock())?;
    let doc = Document::load(input);
    let config = core_config::load_from(args.config.clone())?;
    info!(
        target: "runtime.startup",
        bytes = doc.raw().len(),
        lines = doc.line_count(),
        labelled = args.label.is_some(),
        config = ?config.source,
        hscroll = ?config.hscroll_policy(),
        "input_loaded"
    );

    let options = DispatchOptions {
        hscroll: config.hscroll_policy(),
    };
    let result = {
        // The surface restores the terminal when it goes out of scope, before
        // anything is printed to stdout.
        let mut surface = CrosstermSurface::open()?;
        session::run_session(&doc, &mut surface, &options, args.label.as_deref())?
    };
    info!(
        target: "runtime.shutdown",
        selected = result.selected_line.is_some(),
        "session_finished"
    );
    Ok(result)
}

/// Read all of `input`, decoding invalid UTF-8 lossily.
fn read_input(input: &mut impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).context("read standard input")?;
    let text = String::from_utf8_lossy(&bytes);
    let lossy = matches!(text, Cow::Owned(_));
    tracing::debug!(target: "io", bytes = bytes.len(), lossy, "stdin_read");
    Ok(text.into_owned())
}

/// Print the selection. Returns whether anything was selected.
fn report(result: &SelectionResult, out: &mut impl Write) -> Result<bool> {
    let Some(path) = result.output() else {
        return Ok(false);
    };
    writeln!(out, "{path}").context("write selection")?;
    out.flush().context("flush selection")?;
    Ok(true)
}

fn configure_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path {}", path.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .with_context(|| format!("open log file {}", path.display()))?;
    let (nb_writer, guard) = tracing_appender::non_blocking(appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Global subscriber already installed; drop guard so the writer shuts down.
        Err(_err) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let restored = core_terminal::restore_terminal();
            tracing::error!(target: "runtime.panic", restored, ?info, "panic");
            default_panic(info);
        }));
    });
}
