use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation: {}", join_messages(.0))]
    Validation(BTreeSet<String>),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Validation failure carrying a single rule violation.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation(BTreeSet::from([message.into()]))
    }

    /// Human-readable messages, one per violated rule.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.iter().cloned().collect(),
            Self::NotFound(msg) | Self::Conflict(msg) | Self::Database(msg) => vec![msg.clone()],
        }
    }
}

fn join_messages(messages: &BTreeSet<String>) -> String {
    messages.iter().map(String::as_str).collect::<Vec<_>>().join("; ")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
