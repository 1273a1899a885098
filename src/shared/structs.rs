/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Next floor in this direction, if the building has one.
    pub fn next_floor(&self, floor: u8, top_floor: u8) -> Option<u8> {
        match *self {
            Direction::Up if floor < top_floor => Some(floor + 1),
            Direction::Down if floor > 0 => Some(floor - 1),
            _ => None,
        }
    }
}

/**
 * Direction lamp state of a car.
 *
 * The indicator tells waiting passengers (and the rest of the dispatcher) which way
 * the car is committed to travel. `Both` means the car accepts passengers going either
 * way, `None` means it accepts nobody.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Up,
    Down,
    Both,
    None,
}

impl Indicator {
    /// Lamp pair as (going up, going down).
    pub fn lamps(&self) -> (bool, bool) {
        match *self {
            Indicator::Up => (true, false),
            Indicator::Down => (false, true),
            Indicator::Both => (true, true),
            Indicator::None => (false, false),
        }
    }

    pub fn from_lamps(up: bool, down: bool) -> Indicator {
        match (up, down) {
            (true, false) => Indicator::Up,
            (false, true) => Indicator::Down,
            (true, true) => Indicator::Both,
            (false, false) => Indicator::None,
        }
    }

    /// Indicator for travelling from `from` to `to`. Same floor gives `Both`.
    pub fn toward(from: u8, to: u8) -> Indicator {
        if to > from {
            Indicator::Up
        } else if to < from {
            Indicator::Down
        } else {
            Indicator::Both
        }
    }

    pub fn shows(&self, direction: Direction) -> bool {
        let (up, down) = self.lamps();
        match direction {
            Direction::Up => up,
            Direction::Down => down,
        }
    }
}

/// Hall call lamps of one landing, mirrored from the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Floor {
    pub floor_num: u8,
    pub up_requested: bool,
    pub down_requested: bool,
}

impl Floor {
    pub fn new(floor_num: u8) -> Floor {
        Floor {
            floor_num,
            up_requested: false,
            down_requested: false,
        }
    }

    pub fn has_call(&self) -> bool {
        self.up_requested || self.down_requested
    }

    pub fn has_call_in(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_requested,
            Direction::Down => self.down_requested,
        }
    }

    pub fn set_call(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Up => self.up_requested = active,
            Direction::Down => self.down_requested = active,
        }
    }
}
