/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{CallMatching, Zoning};
use crate::dispatcher::Dispatcher;
use crate::elevator::Elevator;
use crate::shared::{Direction, Indicator};

impl Dispatcher {
    /**
     * Assigns a fresh hall call at `floor`.
     *
     * The best candidate wins. An idle winner is sent to the caller right away. A winner
     * already travelling the caller's way gets no command, it stops when it passes the
     * floor. Without any candidate the floor waits in the pending pool.
     */
    pub fn handle_floor_call(&mut self, floor: u8, direction: Direction) {
        info!("Call at floor {} for direction: {:?}", floor, direction);
        self.floors[floor as usize].set_call(direction, true);

        let candidates = self.find_call_candidates(floor, direction);
        let Some(&id) = candidates.first() else {
            if self.pool.push(floor) {
                info!("Added floor {} to pool: {:?}", floor, self.pool);
            }
            return;
        };

        let elevator = &mut self.elevators[id];
        if elevator.is_idle() {
            let indicator = Indicator::toward(elevator.current_floor(), floor);
            elevator.go_to_floor(floor, &mut self.outbox);
            elevator.set_indicator(indicator, &mut self.outbox);
            info!("Sending elevator {} to floor {}", id, floor);
        } else {
            info!("Elevator {} will pick them up soon", id);
        }
        debug!("Elev {} queue: {:?}", id, elevator.destination_queue());
    }

    /// Cars allowed to answer a call at `floor`, best first. Filters run before the sort.
    pub fn find_call_candidates(&self, floor: u8, direction: Direction) -> Vec<usize> {
        let mut candidates: Vec<usize> = self
            .elevators
            .iter()
            .filter(|e| self.matches_call(e, floor, direction))
            .map(|e| e.id)
            .collect();

        let n_elevators = self.elevators.len();
        let lower_half_call = u16::from(floor) * 2 < u16::from(self.top_floor) + 1;
        if self.config.zoning == Zoning::StickToTop && n_elevators > 1 && lower_half_call {
            // Calls from the lower floors are left to the lower half of the fleet
            candidates.retain(|&id| id < n_elevators / 2);
        }

        if self.config.large_car.skips_downward_stops()
            && candidates.iter().any(|&id| self.elevators[id].is_large())
        {
            candidates.retain(|&id| {
                let e = &self.elevators[id];
                !(e.is_large() && e.current_floor() == self.top_floor)
            });
        }

        self.sort_by_distance_and_load(&mut candidates, floor);
        candidates
    }

    fn matches_call(&self, elevator: &Elevator, floor: u8, direction: Direction) -> bool {
        let thresholds = &self.config.thresholds;
        if self.config.large_car.skips_downward_stops()
            && elevator.is_large()
            && direction == Direction::Down
        {
            return false;
        }

        // A moving car only qualifies when the caller is on its way
        match self.config.call_matching {
            CallMatching::NearbyDetour => {
                elevator.is_idle()
                    || (elevator.has_room(thresholds.detour_max_load)
                        && elevator.distance_to(floor) <= thresholds.detour_max_distance
                        && elevator.will_pass(floor, direction))
            }
            CallMatching::SameDirection => {
                elevator.has_room(thresholds.pickup_max_load)
                    && (elevator.is_idle() || elevator.will_pass(floor, direction))
            }
        }
    }
}
