pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod elevator;
pub mod error;
pub mod scenario;
pub mod shared;


pub use config::Config;
pub use controller::{Command, Controller, HostEvent};
pub use error::{ConfigError, ControllerError, ScenarioError};
