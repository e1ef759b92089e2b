// Diagnostic Logging
//
// Leveled log records on standard error, tagged with the elapsed time since
// the first record and the subsystem that produced them. Standard output is
// reserved for the usage line and the one-line failure diagnostic, so
// nothing here ever writes to it.
//
// - Levels: Debug, Info, Warn, Error
// - Records below the current level are dropped before formatting
// - Debug records carry file:line
// - The level lives in an atomic; the binary runs at Warn, library callers
//   may lower it with `set_level`

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
        }
    }

    const fn from_u8(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

static CURRENT_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static START: OnceLock<Instant> = OnceLock::new();

pub fn init(level: LogLevel) {
    START.get_or_init(Instant::now);
    set_level(level);
}

pub fn set_level(level: LogLevel) {
    CURRENT_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_level() -> LogLevel {
    LogLevel::from_u8(CURRENT_LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= get_level()
}

fn format_record(
    elapsed_ms: u128,
    level: LogLevel,
    origin: &str,
    args: fmt::Arguments,
    file: &str,
    line: u32,
) -> String {
    let seconds = elapsed_ms / 1000;
    let milliseconds = elapsed_ms % 1000;

    if level == LogLevel::Debug {
        format!(
            "[t={}.{:03}s] [{}] [{}] {} ({}:{})",
            seconds,
            milliseconds,
            level.as_str(),
            origin,
            args,
            file,
            line
        )
    } else {
        format!(
            "[t={}.{:03}s] [{}] [{}] {}",
            seconds,
            milliseconds,
            level.as_str(),
            origin,
            args
        )
    }
}

pub fn _log(level: LogLevel, origin: &str, args: fmt::Arguments, file: &str, line: u32) {
    if !enabled(level) {
        return;
    }

    let elapsed_ms = START.get_or_init(Instant::now).elapsed().as_millis();
    let record = format_record(elapsed_ms, level, origin, args, file, line);

    // A closed stderr is not worth failing the build step over
    let _ = writeln!(std::io::stderr().lock(), "{}", record);
}

#[macro_export]
macro_rules! log_debug {
    ($origin:expr, $($arg:tt)*) => {
        $crate::log::_log(
            $crate::log::LogLevel::Debug,
            $origin,
            format_args!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($origin:expr, $($arg:tt)*) => {
        $crate::log::_log(
            $crate::log::LogLevel::Info,
            $origin,
            format_args!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[macro_export]
macro_rules! log_warn {
    ($origin:expr, $($arg:tt)*) => {
        $crate::log::_log(
            $crate::log::LogLevel::Warn,
            $origin,
            format_args!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($origin:expr, $($arg:tt)*) => {
        $crate::log::_log(
            $crate::log::LogLevel::Error,
            $origin,
            format_args!($($arg)*),
            file!(),
            line!()
        )
    };
}
