pub mod arrival;
pub mod call_dispatcher;
pub mod idle_scheduler;
pub mod passing_resolver;
pub mod pending_pool;

pub use pending_pool::PendingCallPool;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, DispatchConfig};
use crate::controller::{Command, Outbox};
use crate::elevator::Elevator;
use crate::shared::{Direction, Floor};

/**
 * Scheduling context shared by every event handler.
 *
 * Owns the fleet, the mirrored hall call lamps, the pending call pool and the commands
 * produced while the current event is handled. Exactly one event is handled at a time,
 * so nothing here is locked.
 *
 * # Fields
 * - `elevators`:   Every car, indexed by id.
 * - `floors`:      Hall call lamps per floor, as last reported by the host.
 * - `pool`:        Hall calls waiting for an idle car.
 * - `commitments`: Car that committed to stop for a hall call while passing it.
 * - `config`:      Policies and thresholds, fixed at startup.
 * - `top_floor`:   Highest floor number.
 * - `outbox`:      Commands for the host, drained after each event.
 */
pub struct Dispatcher {
    pub(crate) elevators: Vec<Elevator>,
    pub(crate) floors: Vec<Floor>,
    pub(crate) pool: PendingCallPool,
    pub(crate) commitments: HashMap<(u8, Direction), usize>,
    pub(crate) config: DispatchConfig,
    pub(crate) top_floor: u8,
    pub(crate) outbox: Outbox,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Dispatcher {
        let capacities = &config.building.elevator_capacities;
        let min_large = config.dispatch.thresholds.large_car_min_capacity;

        // A lone car gets no large-car treatment
        let elevators = capacities
            .iter()
            .enumerate()
            .map(|(id, &capacity)| {
                Elevator::new(id, capacity, capacities.len() > 1 && capacity >= min_large)
            })
            .collect();

        Dispatcher {
            elevators,
            floors: (0..=config.top_floor()).map(Floor::new).collect(),
            pool: PendingCallPool::new(),
            commitments: HashMap::new(),
            config: config.dispatch.clone(),
            top_floor: config.top_floor(),
            outbox: Vec::new(),
        }
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: usize) -> Option<&Elevator> {
        self.elevators.get(id)
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn pool(&self) -> &PendingCallPool {
        &self.pool
    }

    pub fn top_floor(&self) -> u8 {
        self.top_floor
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    /// Car still on its way to stop for the hall call at `floor` in `direction`.
    pub fn committed_car(&self, floor: u8, direction: Direction) -> Option<usize> {
        self.commitments
            .get(&(floor, direction))
            .copied()
            .filter(|&id| self.elevators[id].destination_queue().contains(&floor))
    }

    /// The host switched off a hall call lamp: the call is served.
    pub fn handle_hall_cleared(&mut self, floor: u8, direction: Direction) {
        debug!("Hall call {:?} at floor {} served", direction, floor);
        self.floors[floor as usize].set_call(direction, false);
        self.commitments.remove(&(floor, direction));
    }

    pub fn check_invariants(&self) {
        for elevator in &self.elevators {
            elevator.check_invariants();
        }
        debug_assert!(
            self.pool
                .iter()
                .enumerate()
                .all(|(i, floor)| self.pool.iter().skip(i + 1).all(|other| other != floor)),
            "pending pool holds duplicates: {:?}",
            self.pool
        );
    }

    /// Stable sort of car ids: closest to `floor` first, emptier first on equal distance.
    pub(crate) fn sort_by_distance_and_load(&self, ids: &mut [usize], floor: u8) {
        ids.sort_by(|&a, &b| {
            let (a, b) = (&self.elevators[a], &self.elevators[b]);
            match a.distance_to(floor).cmp(&b.distance_to(floor)) {
                Ordering::Equal => a.load_factor().total_cmp(&b.load_factor()),
                unequal => unequal,
            }
        });
    }
}
