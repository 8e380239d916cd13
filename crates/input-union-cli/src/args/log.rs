use clap::ValueEnum;

/// Verbosity of the `graphql_input_union` logs. Other crates stay silent below `trace`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    /// Includes how each input union validated
    Debug,
    /// Includes every member resolution and every other crate
    Trace,
}

impl LogLevel {
    pub(crate) fn env_filter(self) -> String {
        match self {
            LogLevel::Off | LogLevel::Trace => self.to_string(),
            level => format!("graphql_input_union={level},off"),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum LogStyle {
    #[default]
    Text,
    /// Multi-line text with source locations
    Pretty,
    Json,
}
