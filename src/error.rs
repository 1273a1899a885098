use std::path::PathBuf;

use crate::controller::{EventKind, Source};

/// Errors raised while loading the controller configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while loading a scripted event sequence.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An event the controller has no handler for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("no handler registered for {kind:?} on {entity:?}")]
    Unregistered { entity: Source, kind: EventKind },

    #[error("no floor {0} in this building")]
    UnknownFloor(u8),
}
