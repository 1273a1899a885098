/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Dispatcher;

impl Dispatcher {
    /// Car `id` stopped at `floor`: the stop is done and the indicator follows the next one.
    pub fn handle_stopped_at_floor(&mut self, id: usize, floor: u8) {
        let top_floor = self.top_floor;
        self.commitments
            .retain(|&(committed_floor, _), owner| committed_floor != floor || *owner != id);

        let elevator = &mut self.elevators[id];
        elevator.record_floor(floor);
        elevator.clear_press(floor);
        elevator.arrive_at(floor);
        let indicator = elevator.indicator_on_arrival(floor, top_floor);
        elevator.set_indicator(indicator, &mut self.outbox);
        debug!("Elev {} queue: {:?}", id, elevator.destination_queue());
    }

    /**
     * A rider in car `id` asked for `floor`.
     *
     * A large car filling up at the ground floor holds requests back until it is loaded
     * past the boarding threshold. Everything else goes straight into the queue.
     */
    pub fn handle_car_button(&mut self, id: usize, floor: u8) {
        let batching = self.config.large_car.batches_boarding();
        let boarding_max_load = self.config.thresholds.boarding_max_load;
        let elevator = &mut self.elevators[id];
        elevator.record_press(floor);
        debug!("Elev {} button {} queue: {:?}", id, floor, elevator.destination_queue());

        if batching && elevator.is_large() && elevator.current_floor() == 0 {
            if elevator.has_room(boarding_max_load) {
                elevator.buffer_request(floor);
                return;
            }
            elevator.flush_boarding(&mut self.outbox);
        }

        elevator.enqueue(floor, &mut self.outbox);
    }

    /// A large car waiting at the ground floor departs once loaded past the boarding threshold.
    pub fn handle_load_changed(&mut self, id: usize, load_factor: f64) {
        let batching = self.config.large_car.batches_boarding();
        let boarding_max_load = self.config.thresholds.boarding_max_load;
        let elevator = &mut self.elevators[id];
        elevator.record_load(load_factor);

        if batching
            && elevator.is_large()
            && elevator.current_floor() == 0
            && !elevator.has_room(boarding_max_load)
        {
            elevator.flush_boarding(&mut self.outbox);
        }
    }
}
