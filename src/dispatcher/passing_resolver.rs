/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Dispatcher;
use crate::shared::{Direction, Indicator};

impl Dispatcher {
    /**
     * Runs while car `id` passes `floor` travelling in `direction`.
     *
     * The next floor is skipped when nobody needs it, then the rest of the queue is
     * pruned. When the floor has a hall call in the travel direction that no car has
     * claimed yet, the nearby cars going the same way are ranked and only the best one
     * commits to stop, so the call gets a single pickup. A call nobody can take goes to
     * the pending pool.
     */
    pub fn handle_passing_floor(&mut self, id: usize, floor: u8, direction: Direction) {
        let express = self.config.large_car.skips_downward_stops();
        let batching = self.config.large_car.batches_boarding();
        let top_floor = self.top_floor;

        let elevator = &mut self.elevators[id];
        elevator.record_floor(floor);
        debug!(
            "Elev {} passing floor {} queue: {:?}",
            id,
            floor,
            elevator.destination_queue()
        );

        // Car has left the lobby, buffered riders go in now
        if elevator.is_large() && batching {
            elevator.flush_boarding(&mut self.outbox);
        }

        // The next stop is settled first so the host can re-plan before reaching it
        if let Some(next_floor) = direction.next_floor(floor, top_floor) {
            elevator.skip_if_unneeded(next_floor, &self.floors, &mut self.outbox);
        }
        elevator.prune(&self.floors, &mut self.outbox);
        if !(elevator.is_large() && express) {
            elevator.align_indicator(&mut self.outbox);
        }

        if self.floors[floor as usize].has_call_in(direction) {
            self.resolve_pickup(id, floor, direction);
        }

        let elevator = &mut self.elevators[id];
        if elevator.destination_queue() == [floor] && !elevator.is_large() {
            elevator.set_indicator(Indicator::Both, &mut self.outbox);
        }
    }

    fn resolve_pickup(&mut self, id: usize, floor: u8, direction: Direction) {
        if let Some(owner) = self.committed_car(floor, direction) {
            debug!("Floor {} already taken by elevator {}", floor, owner);
            return;
        }

        let competing = self.find_competing_elevators(id, floor, direction);
        debug!("Competing for floor {}: {:?}", floor, competing);

        match competing.first() {
            Some(&winner) if winner == id => {
                info!("Elev {} stopping at floor {} on the way", id, floor);
                self.elevators[id].insert_and_stop(floor, &mut self.outbox);
                self.commitments.insert((floor, direction), id);
            }
            Some(&winner) => debug!("Elev {} leaves floor {} to elevator {}", id, floor, winner),
            None => {
                if self.pool.push(floor) {
                    info!("No room passing floor {}, added to pool: {:?}", floor, self.pool);
                }
            }
        }
    }

    /**
     * Cars that could take the hall call at `floor` in `direction`, best first.
     *
     * `passing_id` competes when it has room. Any other car competes when it is within
     * reach, has room and will go by the floor in `direction` on its current queue. Idle
     * cars do not compete: they would never come to the floor on their own.
     */
    pub fn find_competing_elevators(
        &self,
        passing_id: usize,
        floor: u8,
        direction: Direction,
    ) -> Vec<usize> {
        let thresholds = &self.config.thresholds;
        let express = self.config.large_car.skips_downward_stops();

        let mut competing: Vec<usize> = self
            .elevators
            .iter()
            .filter(|e| {
                if e.distance_to(floor) > thresholds.competing_max_distance
                    || !e.has_room(thresholds.pickup_max_load)
                    || (express && e.is_large() && direction == Direction::Down)
                {
                    return false;
                }
                e.id == passing_id || e.will_pass(floor, direction)
            })
            .map(|e| e.id)
            .collect();

        self.sort_by_distance_and_load(&mut competing, floor);
        competing
    }
}
