use log::debug;

use crate::controller::{Command, Outbox};
use crate::elevator::Elevator;
use crate::shared::Indicator;

impl Elevator {
    /**
     * Sets both indicator lamps from `indicator`.
     *
     * A lamp change is reported to the host as a `SetIndicator` command. Setting the
     * lamps they already show is a no-op. Callers never pass `Indicator::None` for a
     * car with queued destinations.
     */
    pub fn set_indicator(&mut self, indicator: Indicator, out: &mut Outbox) {
        let (up, down) = indicator.lamps();
        if (up, down) == (self.going_up_lamp, self.going_down_lamp) {
            return;
        }

        debug!("Elev {} indicator {:?}", self.id, indicator);
        self.going_up_lamp = up;
        self.going_down_lamp = down;
        out.push(Command::SetIndicator {
            elevator: self.id,
            up,
            down,
        });
    }

    /// Points the indicator at the head of the queue, or `Both` when nothing is queued.
    pub fn align_indicator(&mut self, out: &mut Outbox) {
        let indicator = match self.destination_queue.first() {
            Some(&next) => Indicator::toward(self.current_floor(), next),
            None => Indicator::Both,
        };
        self.set_indicator(indicator, out);
    }

    /// Indicator after stopping at `floor`. The shaft ends force the only possible direction.
    pub fn indicator_on_arrival(&self, floor: u8, top_floor: u8) -> Indicator {
        if floor == 0 {
            return Indicator::Up;
        }
        if floor == top_floor {
            return Indicator::Down;
        }
        match self.destination_queue.first() {
            Some(&next) => Indicator::toward(floor, next),
            None => Indicator::Both,
        }
    }
}
