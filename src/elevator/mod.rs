pub mod indicator;
pub mod queue;
pub mod state;
pub mod elevator_tests;

pub use state::Elevator;
