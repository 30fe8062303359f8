use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    debug_enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, debug_enabled: bool) -> Self {
        Self {
            prefix,
            debug_enabled,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level == Level::Info || self.debug_enabled
    }

    pub fn format_line(&self, level: Level, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp, prefix, level.tag(), file_name, line, message
            ),
            None => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, level.tag(), file_name, line, message
            ),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let formatted = self.format_line(level, file, line, message);
        match level {
            Level::Info => println!("{}", formatted),
            Level::Debug => eprintln!("{}", formatted),
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, debug_enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, debug_enabled));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(Level::Info, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

/// Silent until the logger is initialized with debug enabled.
pub fn log_debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(Level::Debug, file, line, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(Level::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log_debug(file!(), line!(), &format!($($arg)*))
        }
    };
}
