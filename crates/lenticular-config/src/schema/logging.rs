use serde::{Deserialize, Serialize};

/// Default verbosity for the lenticular crates when no `--log-level` is given.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the lenticular crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "lenticular=trace",
            Self::Debug => "lenticular=debug",
            Self::Info => "lenticular=info",
            Self::Warn => "lenticular=warn",
            Self::Error => "lenticular=error",
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
