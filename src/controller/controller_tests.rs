/*
 * Unit tests for controller module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_controller_init
 *  - test_controller_rejects_unregistered_events
 *  - test_controller_rejects_unknown_floor
 *  - test_controller_unchecked_empty_building
 *  - test_controller_sends_idle_car
 *  - test_controller_mirrors_hall_lamps
 *  - test_controller_pooled_call_claimed_on_idle
 *  - test_controller_run
 *  - test_controller_run_stops_on_closed_channel
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::config::Config;
    use crate::controller::{Command, Controller, EventKind, HostEvent, Source};
    use crate::error::ControllerError;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::Indicator;
    use crossbeam_channel::unbounded;
    use std::thread::Builder;
    use std::time::Duration;

    fn setup_controller(n_floors: u8, capacities: Vec<u32>) -> Controller {
        Controller::new(&Config::new(n_floors, capacities))
    }

    #[test]
    fn test_controller_init() {
        // Arrange
        let controller = setup_controller(10, vec![4, 4, 4]);

        // Assert
        let dispatcher = controller.dispatcher();
        assert_eq!(dispatcher.elevators().len(), 3);
        assert_eq!(dispatcher.floors().len(), 10);
        assert_eq!(dispatcher.top_floor(), 9);
        assert!(dispatcher.pool().is_empty());
        for elevator in dispatcher.elevators() {
            assert_eq!(elevator.current_floor(), 0);
            assert_eq!(elevator.indicator(), Indicator::Both);
            assert!(elevator.is_idle());
        }
    }

    #[test]
    fn test_controller_rejects_unregistered_events() {
        // Arrange
        let mut controller = setup_controller(10, vec![4]);

        // Act
        let up_at_top = controller.handle(HostEvent::HallButton {
            floor: 9,
            direction: Up,
        });
        let down_at_ground = controller.handle(HostEvent::HallButton {
            floor: 0,
            direction: Down,
        });
        let unknown_car = controller.handle(HostEvent::Idle { elevator: 3 });

        // Assert
        assert_eq!(
            up_at_top,
            Err(ControllerError::Unregistered {
                entity: Source::Floor(9),
                kind: EventKind::HallButton(Up),
            })
        );
        assert_eq!(
            down_at_ground,
            Err(ControllerError::Unregistered {
                entity: Source::Floor(0),
                kind: EventKind::HallButton(Down),
            })
        );
        assert_eq!(
            unknown_car,
            Err(ControllerError::Unregistered {
                entity: Source::Elevator(3),
                kind: EventKind::Idle,
            })
        );
        assert!(controller.dispatcher().floors().iter().all(|f| !f.has_call()));
    }

    #[test]
    fn test_controller_rejects_unknown_floor() {
        // Arrange
        let mut controller = setup_controller(10, vec![4]);

        // Act
        let result = controller.handle(HostEvent::PassingFloor {
            elevator: 0,
            floor: 12,
            direction: Up,
        });

        // Assert
        assert_eq!(result, Err(ControllerError::UnknownFloor(12)));
        assert_eq!(controller.dispatcher().elevators()[0].current_floor(), 0);
    }

    #[test]
    fn test_controller_unchecked_empty_building() {
        // Arrange
        let mut controller = setup_controller(0, vec![4]);

        // Act
        let idle = controller.handle(HostEvent::Idle { elevator: 0 });
        let hall = controller.handle(HostEvent::HallButton {
            floor: 0,
            direction: Up,
        });

        // Assert
        assert_eq!(controller.dispatcher().top_floor(), 0);
        assert_eq!(controller.dispatcher().floors().len(), 1);
        assert!(idle.is_ok());
        assert!(matches!(hall, Err(ControllerError::Unregistered { .. })));
    }

    #[test]
    fn test_controller_sends_idle_car() {
        // Arrange
        let mut controller = setup_controller(10, vec![4]);

        // Act
        let commands = controller
            .handle(HostEvent::HallButton {
                floor: 5,
                direction: Up,
            })
            .unwrap();

        // Assert
        assert_eq!(
            commands,
            vec![
                Command::GoToFloor {
                    elevator: 0,
                    floor: 5,
                    stop_now: false
                },
                Command::SetIndicator {
                    elevator: 0,
                    up: true,
                    down: false
                },
            ]
        );
    }

    #[test]
    fn test_controller_mirrors_hall_lamps() {
        // Arrange
        let mut controller = setup_controller(10, vec![4]);

        // Act
        controller
            .handle(HostEvent::HallButton {
                floor: 5,
                direction: Down,
            })
            .unwrap();
        let lit = controller.dispatcher().floors()[5].clone();
        let cleared = controller
            .handle(HostEvent::HallCleared {
                floor: 5,
                direction: Down,
            })
            .unwrap();

        // Assert
        assert!(lit.down_requested);
        assert!(!lit.up_requested);
        assert!(cleared.is_empty());
        assert!(!controller.dispatcher().floors()[5].has_call());
    }

    #[test]
    fn test_controller_pooled_call_claimed_on_idle() {
        // Arrange
        let mut controller = setup_controller(10, vec![4]);
        let script = vec![
            HostEvent::CarButton {
                elevator: 0,
                floor: 9,
            },
            HostEvent::LoadChanged {
                elevator: 0,
                load_factor: 0.8,
            },
            HostEvent::HallButton {
                floor: 7,
                direction: Down,
            },
            HostEvent::PassingFloor {
                elevator: 0,
                floor: 7,
                direction: Up,
            },
            HostEvent::StoppedAtFloor {
                elevator: 0,
                floor: 9,
            },
            HostEvent::LoadChanged {
                elevator: 0,
                load_factor: 0.0,
            },
        ];
        for event in script {
            controller.handle(event).unwrap();
        }
        let pooled: Vec<u8> = controller.dispatcher().pool().iter().copied().collect();

        // Act
        let commands = controller.handle(HostEvent::Idle { elevator: 0 }).unwrap();

        // Assert
        assert_eq!(pooled, vec![7]);
        assert!(controller.dispatcher().pool().is_empty());
        assert!(commands.contains(&Command::GoToFloor {
            elevator: 0,
            floor: 7,
            stop_now: false
        }));
        let elevator = &controller.dispatcher().elevators()[0];
        assert_eq!(elevator.destination_queue(), &[7]);
        assert_eq!(elevator.indicator(), Indicator::Down);
        assert!(elevator.pressed_floors().is_empty());
    }

    #[test]
    fn test_controller_run() {
        // Arrange
        let controller = setup_controller(10, vec![4]);
        let (event_tx, event_rx) = unbounded::<HostEvent>();
        let (command_tx, command_rx) = unbounded::<Command>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run(event_rx, command_tx, terminate_rx))
            .unwrap();

        // Act
        event_tx
            .send(HostEvent::HallButton {
                floor: 9,
                direction: Up,
            })
            .unwrap();
        event_tx
            .send(HostEvent::HallButton {
                floor: 5,
                direction: Up,
            })
            .unwrap();

        // Assert
        let timeout = Duration::from_secs(1);
        assert_eq!(
            command_rx.recv_timeout(timeout).unwrap(),
            Command::GoToFloor {
                elevator: 0,
                floor: 5,
                stop_now: false
            }
        );
        assert_eq!(
            command_rx.recv_timeout(timeout).unwrap(),
            Command::SetIndicator {
                elevator: 0,
                up: true,
                down: false
            }
        );

        // Cleanup
        terminate_tx.send(()).unwrap();
        controller_thread.join().unwrap();
    }

    #[test]
    fn test_controller_run_stops_on_closed_channel() {
        // Arrange
        let controller = setup_controller(10, vec![4]);
        let (event_tx, event_rx) = unbounded::<HostEvent>();
        let (command_tx, command_rx) = unbounded::<Command>();
        let (_terminate_tx, terminate_rx) = unbounded::<()>();
        let controller_thread = Builder::new()
            .name("controller".into())
            .spawn(move || controller.run(event_rx, command_tx, terminate_rx))
            .unwrap();

        // Act
        event_tx.send(HostEvent::Idle { elevator: 0 }).unwrap();
        drop(event_tx);
        controller_thread.join().unwrap();

        // Assert
        assert!(command_rx.try_iter().next().is_none());
    }
}
