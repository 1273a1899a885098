/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * Events delivered by the host simulation, one at a time.
 *
 * Each event carries the host-owned values (floor reached, load, lamp change) that
 * the controller mirrors before deciding anything.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    HallButton { floor: u8, direction: Direction },
    HallCleared { floor: u8, direction: Direction },
    CarButton { elevator: usize, floor: u8 },
    PassingFloor { elevator: usize, floor: u8, direction: Direction },
    StoppedAtFloor { elevator: usize, floor: u8 },
    Idle { elevator: usize },
    LoadChanged { elevator: usize, load_factor: f64 },
}

/// Handler lookup key, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    HallButton(Direction),
    HallCleared,
    CarButton,
    PassingFloor,
    StoppedAtFloor,
    Idle,
    LoadChanged,
}

/// Entity an event is registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Elevator(usize),
    Floor(u8),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match *self {
            HostEvent::HallButton { direction, .. } => EventKind::HallButton(direction),
            HostEvent::HallCleared { .. } => EventKind::HallCleared,
            HostEvent::CarButton { .. } => EventKind::CarButton,
            HostEvent::PassingFloor { .. } => EventKind::PassingFloor,
            HostEvent::StoppedAtFloor { .. } => EventKind::StoppedAtFloor,
            HostEvent::Idle { .. } => EventKind::Idle,
            HostEvent::LoadChanged { .. } => EventKind::LoadChanged,
        }
    }

    pub fn source(&self) -> Source {
        match *self {
            HostEvent::HallButton { floor, .. } | HostEvent::HallCleared { floor, .. } => {
                Source::Floor(floor)
            }
            HostEvent::CarButton { elevator, .. }
            | HostEvent::PassingFloor { elevator, .. }
            | HostEvent::StoppedAtFloor { elevator, .. }
            | HostEvent::Idle { elevator }
            | HostEvent::LoadChanged { elevator, .. } => Source::Elevator(elevator),
        }
    }
}

/// Instructions for the host. The host moves cars, the controller only decides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    GoToFloor {
        elevator: usize,
        floor: u8,
        stop_now: bool,
    },
    SetIndicator {
        elevator: usize,
        up: bool,
        down: bool,
    },
    UpdateQueue {
        elevator: usize,
        queue: Vec<u8>,
    },
}

/// Commands collected while one event is handled.
pub type Outbox = Vec<Command>;
