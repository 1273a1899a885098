pub mod controller;
pub mod events;
pub mod controller_tests;

pub use controller::Controller;
pub use events::Command;
pub use events::EventKind;
pub use events::HostEvent;
pub use events::Outbox;
pub use events::Source;
