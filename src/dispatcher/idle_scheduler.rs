/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Zoning;
use crate::dispatcher::Dispatcher;
use crate::shared::Indicator;

impl Dispatcher {
    /**
     * Finds work for a car that has run out of destinations.
     *
     * The car shows `Both` and then claims pooled floors until one of them still has a
     * hall call. Stale entries are dropped on the way. A large car holding buffered
     * requests departs with them first. An express large car above the ground floor
     * returns there instead, and with stick-to-top zoning the upper half of the fleet
     * parks at the top floor when the pool is empty.
     */
    pub fn handle_idle(&mut self, id: usize) {
        info!("E {} is idle", id);
        let top_floor = self.top_floor;
        let n_elevators = self.elevators.len();
        let elevator = &mut self.elevators[id];

        if !elevator.is_idle() {
            debug!("Elev {} still has queue {:?}", id, elevator.destination_queue());
            return;
        }

        if elevator.is_large() && self.config.large_car.skips_downward_stops() {
            if elevator.current_floor() == 0 {
                elevator.set_indicator(Indicator::Up, &mut self.outbox);
                if elevator.flush_boarding(&mut self.outbox) {
                    info!("Elev {} departing with boarded riders", id);
                }
            } else {
                elevator.set_indicator(Indicator::Down, &mut self.outbox);
                elevator.go_to_floor(0, &mut self.outbox);
            }
            return;
        }

        elevator.set_indicator(Indicator::Both, &mut self.outbox);

        // Riders already aboard go before parking or pooled calls
        if elevator.flush_boarding(&mut self.outbox) {
            info!("Elev {} departing with boarded riders", id);
            return;
        }

        if self.config.zoning == Zoning::StickToTop
            && self.pool.is_empty()
            && n_elevators > 1
            && id >= n_elevators / 2
            && elevator.current_floor() != top_floor
        {
            elevator.set_indicator(Indicator::Up, &mut self.outbox);
            elevator.go_to_floor(top_floor, &mut self.outbox);
            return;
        }

        while self.elevators[id].is_idle() {
            let current_floor = self.elevators[id].current_floor();
            let Some(next_floor) = self.pool.take(self.config.idle_pickup, current_floor) else {
                break;
            };

            if !self.floors[next_floor as usize].has_call() {
                debug!("Dropping stale pooled floor {}", next_floor);
                continue;
            }

            info!("Elev {} picking floor {} from pool", id, next_floor);
            let elevator = &mut self.elevators[id];
            elevator.go_to_floor(next_floor, &mut self.outbox);
            elevator.set_indicator(Indicator::toward(current_floor, next_floor), &mut self.outbox);
        }
    }
}
