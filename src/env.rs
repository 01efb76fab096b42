//! Typed environment variable access.

use std::env;
use std::fmt;

/// Environment variable parse error.
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// Environment variable accessor.
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Environment variable not set".to_string(),
            }),
        }
    }
}

/// Core environment variables.
pub mod core {
    use super::*;

    /// Log level.
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "DWIBAHASA_LOG_LEVEL";
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Translation-related environment variables.
pub mod i18n {
    use super::*;

    /// Startup language override. Passed through lowercased; unsupported
    /// codes are coerced downstream with a warning, same as any other
    /// language selection.
    pub struct Lang;
    impl EnvVar<String> for Lang {
        const NAME: &'static str = "DWIBAHASA_LANG";
        const DESCRIPTION: &'static str = "Language override at startup (id, en)";

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_lowercase())
        }
    }

    /// Explicit state file, bypassing the default search paths.
    pub struct StateFile;
    impl EnvVar<String> for StateFile {
        const NAME: &'static str = "DWIBAHASA_STATE_FILE";
        const DESCRIPTION: &'static str = "Path of the persisted language state file";

        fn parse(value: &str) -> EnvResult<String> {
            if value.trim().is_empty() {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Path must not be empty".to_string(),
                })
            } else {
                Ok(value.to_string())
            }
        }
    }
}
