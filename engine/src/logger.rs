use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, target: LogTarget, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = self.format_line(&timestamp, message);
        match target {
            LogTarget::Stdout => println!("{}", line),
            LogTarget::Stderr => eprintln!("{}", line),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(target: LogTarget, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(target, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogTarget::Stdout, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogTarget::Stderr, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_prefix() {
        let logger = Logger::new(Some("Engine".to_string()));
        assert_eq!(
            logger.format_line("2024-01-01 00:00:00", "ready"),
            "[2024-01-01 00:00:00][Engine] ready"
        );
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None);
        assert_eq!(logger.format_line("ts", "move 4"), "[ts] move 4");
    }
}
