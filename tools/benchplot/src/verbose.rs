//! Console output for benchplot.
//!
//! Progress goes to stdout, gated by the level picked on the command line:
//! - **Quiet** (`-q`): only `All charts generated!`
//! - **Default**: also `Generating ...` and `Saved: <path>`
//! - **Verbose** (`-v`): also record counts, load/render timings and the
//!   table of values each chart is drawn from
//!
//! `warning:` and `error:` lines go to stderr at every level.

use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// How much progress output to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Default = 1,
    Verbose = 2,
}

impl Verbosity {
    /// Level selected by the `-q`/`-v` flags. Quiet wins if both are set.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Default,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Default as u8);

/// Set the process-wide level from the command-line flags.
pub fn init(quiet: bool, verbose: bool) {
    VERBOSITY.store(Verbosity::from_flags(quiet, verbose) as u8, Ordering::Relaxed);
}

/// Current level.
pub fn verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Quiet,
        2 => Verbosity::Verbose,
        _ => Verbosity::Default,
    }
}

pub fn is_verbose() -> bool {
    verbosity() == Verbosity::Verbose
}

pub fn is_quiet() -> bool {
    verbosity() == Verbosity::Quiet
}

/// `println!` that only fires under `-v`, for counts and data tables.
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            println!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// `println!` for progress lines; silent under `-q`.
macro_rules! dprintln {
    ($($arg:tt)*) => {
        if !$crate::verbose::is_quiet() {
            println!($($arg)*);
        }
    };
}

pub(crate) use dprintln;

/// Print `warning: <message>` to stderr, colored on a terminal.
pub fn warn(message: impl Display) {
    if std::io::stderr().is_tty() {
        eprintln!("{} {message}", "warning:".yellow().bold());
    } else {
        eprintln!("warning: {message}");
    }
}

/// Print `error: <message>` to stderr, colored on a terminal.
pub fn error(message: impl Display) {
    if std::io::stderr().is_tty() {
        eprintln!("{} {message}", "error:".red().bold());
    } else {
        eprintln!("error: {message}");
    }
}

/// Times one stage of chart generation (`load results`, `render`).
///
/// Under `-v` the stage duration is printed when the guard drops, e.g.
/// `  render: 412.3ms`.
pub struct Timer {
    stage: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            println!("  {}: {:.1?}", self.stage, self.start.elapsed());
        }
    }
}
