/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::collections::HashMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::controller::events::{Command, EventKind, HostEvent, Source};
use crate::dispatcher::Dispatcher;
use crate::error::ControllerError;
use crate::shared::Direction;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Host(HostEvent),
    Terminate,
    Disconnected,
}

type Handler = fn(&mut Dispatcher, &HostEvent);

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Host-facing adapter around the [`Dispatcher`].
 *
 * Every (entity, event kind) pair the building supports is registered in a dispatch
 * table at startup. An incoming event is looked up and its handler, which also records
 * the host values the event carries, runs to completion before the next event is
 * looked at.
 *
 * # Fields
 * - `dispatcher`:  Scheduling state and logic.
 * - `handlers`:    Dispatch table from (source, kind) to handler.
 */
pub struct Controller {
    dispatcher: Dispatcher,
    handlers: HashMap<(Source, EventKind), Handler>,
}

impl Controller {
    pub fn new(config: &Config) -> Controller {
        let dispatcher = Dispatcher::new(config);
        let mut handlers: HashMap<(Source, EventKind), Handler> = HashMap::new();

        for elevator in dispatcher.elevators() {
            let source = Source::Elevator(elevator.id);
            handlers.insert((source, EventKind::Idle), on_idle);
            handlers.insert((source, EventKind::PassingFloor), on_passing_floor);
            handlers.insert((source, EventKind::StoppedAtFloor), on_stopped_at_floor);
            handlers.insert((source, EventKind::CarButton), on_car_button);
            handlers.insert((source, EventKind::LoadChanged), on_load_changed);
        }

        let top_floor = dispatcher.top_floor();
        for floor in 0..=top_floor {
            let source = Source::Floor(floor);
            // No up button on the top floor, no down button on the ground floor
            if floor < top_floor {
                handlers.insert((source, EventKind::HallButton(Direction::Up)), on_hall_button);
            }
            if floor > 0 {
                handlers.insert((source, EventKind::HallButton(Direction::Down)), on_hall_button);
            }
            handlers.insert((source, EventKind::HallCleared), on_hall_cleared);
        }

        Controller {
            dispatcher,
            handlers,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handles one host event and returns the commands it produced.
    pub fn handle(&mut self, event: HostEvent) -> Result<Vec<Command>, ControllerError> {
        let (source, kind) = (event.source(), event.kind());
        let handler = *self
            .handlers
            .get(&(source, kind))
            .ok_or(ControllerError::Unregistered {
                entity: source,
                kind,
            })?;

        if let HostEvent::CarButton { floor, .. }
        | HostEvent::PassingFloor { floor, .. }
        | HostEvent::StoppedAtFloor { floor, .. } = event
        {
            if floor > self.dispatcher.top_floor() {
                return Err(ControllerError::UnknownFloor(floor));
            }
        }

        handler(&mut self.dispatcher, &event);
        self.dispatcher.check_invariants();
        Ok(self.dispatcher.take_commands())
    }

    /**
     * Serves events from `event_rx` until the channel closes or `terminate_rx` fires.
     *
     * Commands are forwarded on `command_tx` in the order they were produced. Events the
     * controller cannot place are logged and dropped.
     */
    pub fn run(
        mut self,
        event_rx: cbc::Receiver<HostEvent>,
        command_tx: cbc::Sender<Command>,
        terminate_rx: cbc::Receiver<()>,
    ) {
        loop {
            match self.wait_for_event(&event_rx, &terminate_rx) {
                Event::Host(event) => match self.handle(event) {
                    Ok(commands) => {
                        for command in commands {
                            if let Err(e) = command_tx.send(command) {
                                error!("Failed to send command to host: {}", e);
                                return;
                            }
                        }
                    }
                    Err(e) => warn!("Ignoring event: {}", e),
                },
                Event::Terminate => {
                    info!("Controller terminated");
                    return;
                }
                Event::Disconnected => {
                    info!("Event channel closed, controller stopping");
                    return;
                }
            }
        }
    }

    fn wait_for_event(
        &self,
        event_rx: &cbc::Receiver<HostEvent>,
        terminate_rx: &cbc::Receiver<()>,
    ) -> Event {
        cbc::select! {
            recv(event_rx) -> event => {
                match event {
                    Ok(event) => Event::Host(event),
                    Err(_) => Event::Disconnected,
                }
            },
            recv(terminate_rx) -> _ => Event::Terminate,
        }
    }
}

/***************************************/
/*              Handlers               */
/***************************************/
fn on_hall_button(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::HallButton { floor, direction } = *event {
        dispatcher.handle_floor_call(floor, direction);
    }
}

fn on_hall_cleared(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::HallCleared { floor, direction } = *event {
        dispatcher.handle_hall_cleared(floor, direction);
    }
}

fn on_car_button(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::CarButton { elevator, floor } = *event {
        dispatcher.handle_car_button(elevator, floor);
    }
}

fn on_passing_floor(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::PassingFloor {
        elevator,
        floor,
        direction,
    } = *event
    {
        dispatcher.handle_passing_floor(elevator, floor, direction);
    }
}

fn on_stopped_at_floor(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::StoppedAtFloor { elevator, floor } = *event {
        dispatcher.handle_stopped_at_floor(elevator, floor);
    }
}

fn on_idle(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::Idle { elevator } = *event {
        dispatcher.handle_idle(elevator);
    }
}

fn on_load_changed(dispatcher: &mut Dispatcher, event: &HostEvent) {
    if let HostEvent::LoadChanged {
        elevator,
        load_factor,
    } = *event
    {
        dispatcher.handle_load_changed(elevator, load_factor);
    }
}
