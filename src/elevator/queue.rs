use log::debug;

use crate::controller::{Command, Outbox};
use crate::elevator::Elevator;
use crate::shared::{Floor, Indicator};

/***************************************/
/*            Queue manager            */
/***************************************/
impl Elevator {
    /**
     * Adds `floor` as a destination.
     *
     * The first destination commits the car to a direction. Later destinations re-sort
     * the whole queue in the committed direction: ascending while going up, descending
     * while going down. A car showing `Both` commits to the direction of its current head
     * before sorting.
     */
    pub fn enqueue(&mut self, floor: u8, out: &mut Outbox) {
        if self.destination_queue.contains(&floor) {
            return;
        }
        self.destination_queue.push(floor);

        if self.destination_queue.len() == 1 {
            self.set_indicator(Indicator::toward(self.current_floor(), floor), out);
        } else {
            let mut indicator = self.indicator();
            if matches!(indicator, Indicator::Both | Indicator::None) {
                indicator = Indicator::toward(self.current_floor(), self.destination_queue[0]);
                self.set_indicator(indicator, out);
            }
            match indicator {
                Indicator::Up => self.destination_queue.sort_unstable(),
                Indicator::Down => self.destination_queue.sort_unstable_by(|a, b| b.cmp(a)),
                _ => {}
            }
        }

        debug!("Elev {} queue: {:?}", self.id, self.destination_queue);
        self.push_queue(out);
    }

    /// Drops queued floors nobody needs any more. Floors with a lit car button always stay.
    pub fn prune(&mut self, floors: &[Floor], out: &mut Outbox) -> bool {
        let before = self.destination_queue.len();
        let pressed = &self.pressed_floors;
        self.destination_queue.retain(|floor| {
            pressed.contains(floor) || floors.get(*floor as usize).map_or(false, Floor::has_call)
        });

        let changed = self.destination_queue.len() != before;
        if changed {
            debug!("Elev {} pruned queue: {:?}", self.id, self.destination_queue);
            self.push_queue(out);
        }
        changed
    }

    /**
     * Removes `candidate` (the floor the car reaches next) when it is queued but neither a
     * car button nor a hall call asks for it. The host is told to recompute the next stop.
     */
    pub fn skip_if_unneeded(&mut self, candidate: u8, floors: &[Floor], out: &mut Outbox) -> bool {
        if !self.destination_queue.contains(&candidate) || self.is_pressed(candidate) {
            return false;
        }
        if floors.get(candidate as usize).map_or(false, Floor::has_call) {
            return false;
        }

        debug!("Elev {} skipping floor {} as no one is there", self.id, candidate);
        self.destination_queue.retain(|&f| f != candidate);
        self.push_queue(out);
        true
    }

    /// Queues `floor` behind the current destinations and tells the host.
    pub fn go_to_floor(&mut self, floor: u8, out: &mut Outbox) {
        if !self.destination_queue.contains(&floor) {
            self.destination_queue.push(floor);
        }
        out.push(Command::GoToFloor {
            elevator: self.id,
            floor,
            stop_now: false,
        });
    }

    /// Makes `floor` the very next stop.
    pub fn insert_and_stop(&mut self, floor: u8, out: &mut Outbox) {
        self.destination_queue.retain(|&f| f != floor);
        self.destination_queue.insert(0, floor);
        out.push(Command::GoToFloor {
            elevator: self.id,
            floor,
            stop_now: true,
        });
    }

    /// Removes `floor` after the car has stopped there.
    pub fn arrive_at(&mut self, floor: u8) -> bool {
        let before = self.destination_queue.len();
        self.destination_queue.retain(|&f| f != floor);
        self.destination_queue.len() != before
    }

    /***************************************/
    /*          Boarding buffer            */
    /***************************************/
    pub fn buffer_request(&mut self, floor: u8) {
        if !self.boarding_buffer.contains(&floor) && !self.destination_queue.contains(&floor) {
            self.boarding_buffer.push(floor);
        }
        debug!("Elev {} boarding buffer: {:?}", self.id, self.boarding_buffer);
    }

    /// Moves every buffered request into the live queue.
    pub fn flush_boarding(&mut self, out: &mut Outbox) -> bool {
        if self.boarding_buffer.is_empty() {
            return false;
        }
        let buffered = std::mem::take(&mut self.boarding_buffer);
        debug!("Elev {} merging boarding buffer {:?}", self.id, buffered);
        for floor in buffered {
            self.enqueue(floor, out);
        }
        true
    }

    fn push_queue(&self, out: &mut Outbox) {
        out.push(Command::UpdateQueue {
            elevator: self.id,
            queue: self.destination_queue.clone(),
        });
    }
}
