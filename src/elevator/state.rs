/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Indicator};

/**
 * One car of the fleet.
 *
 * The struct mixes two kinds of state. Telemetry (`current_floor`, `load_factor`,
 * `pressed_floors`) belongs to the host and is only written by the controller's host
 * adapter when an event reports it. Scheduling state (`destination_queue`, the indicator
 * lamps and `boarding_buffer`) belongs to the controller and is only changed through the
 * queue and indicator operations.
 *
 * # Fields
 * - `id`:                  Stable index of the car, assigned at startup.
 * - `capacity`:            Passenger capacity.
 * - `large`:               Whether large-car policies apply to this car.
 * - `current_floor`:       Last floor the host reported.
 * - `load_factor`:         Fraction of capacity occupied, 0.0 to 1.0.
 * - `pressed_floors`:      Car buttons currently lit.
 * - `destination_queue`:   Floors to visit, in visiting order, without duplicates.
 * - `going_up_lamp`:       Up indicator lamp.
 * - `going_down_lamp`:     Down indicator lamp.
 * - `boarding_buffer`:     Requests held back while a large car fills at the ground floor.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    pub id: usize,
    capacity: u32,
    large: bool,

    // Host telemetry
    current_floor: u8,
    load_factor: f64,
    pub(super) pressed_floors: Vec<u8>,

    // Scheduling state
    pub(crate) destination_queue: Vec<u8>,
    pub(crate) going_up_lamp: bool,
    pub(crate) going_down_lamp: bool,
    pub(crate) boarding_buffer: Vec<u8>,
}

impl Elevator {
    pub fn new(id: usize, capacity: u32, large: bool) -> Elevator {
        Elevator {
            id,
            capacity,
            large,
            current_floor: 0,
            load_factor: 0.0,
            pressed_floors: Vec::new(),
            destination_queue: Vec::new(),
            going_up_lamp: true,
            going_down_lamp: true,
            boarding_buffer: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_large(&self) -> bool {
        self.large
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn pressed_floors(&self) -> &[u8] {
        &self.pressed_floors
    }

    pub fn is_pressed(&self, floor: u8) -> bool {
        self.pressed_floors.contains(&floor)
    }

    pub fn destination_queue(&self) -> &[u8] {
        &self.destination_queue
    }

    pub fn boarding_buffer(&self) -> &[u8] {
        &self.boarding_buffer
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from_lamps(self.going_up_lamp, self.going_down_lamp)
    }

    pub fn is_idle(&self) -> bool {
        self.destination_queue.is_empty()
    }

    pub fn has_room(&self, max_load: f64) -> bool {
        self.load_factor <= max_load
    }

    pub fn distance_to(&self, floor: u8) -> u8 {
        self.current_floor.abs_diff(floor)
    }

    /// Whether the car is committed to travel in `direction`.
    pub fn heading(&self, direction: Direction) -> bool {
        self.indicator().shows(direction)
    }

    /**
     * Whether the car will go by `floor` travelling in `direction` without any new
     * instruction: it is moving that way, has not passed the floor yet and has a queued
     * destination at or beyond it.
     */
    pub fn will_pass(&self, floor: u8, direction: Direction) -> bool {
        if self.is_idle() || !self.heading(direction) {
            return false;
        }
        match direction {
            Direction::Up => {
                self.current_floor <= floor && self.destination_queue.iter().any(|&f| f >= floor)
            }
            Direction::Down => {
                self.current_floor >= floor && self.destination_queue.iter().any(|&f| f <= floor)
            }
        }
    }

    /***************************************/
    /*        Host telemetry updates       */
    /***************************************/
    pub(crate) fn record_floor(&mut self, floor: u8) {
        self.current_floor = floor;
    }

    pub(crate) fn record_load(&mut self, load_factor: f64) {
        self.load_factor = load_factor.clamp(0.0, 1.0);
    }

    pub(crate) fn record_press(&mut self, floor: u8) {
        if !self.pressed_floors.contains(&floor) {
            self.pressed_floors.push(floor);
        }
    }

    pub(crate) fn clear_press(&mut self, floor: u8) {
        self.pressed_floors.retain(|&f| f != floor);
    }

    /// Scheduling invariants. Violations are programming defects.
    pub fn check_invariants(&self) {
        debug_assert!(
            self.destination_queue.is_empty() || self.indicator() != Indicator::None,
            "elevator {} indicates None with queue {:?}",
            self.id,
            self.destination_queue
        );
        debug_assert!(
            (1..self.destination_queue.len())
                .all(|i| !self.destination_queue[..i].contains(&self.destination_queue[i])),
            "elevator {} has duplicate destinations {:?}",
            self.id,
            self.destination_queue
        );
    }
}
