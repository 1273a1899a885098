/*
 * Unit tests for elevator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_elevator_init
 * - test_set_indicator_reports_changes_only
 * - test_enqueue_first_destination_sets_direction
 * - test_enqueue_sorts_in_committed_direction
 * - test_enqueue_ignores_duplicates
 * - test_prune_keeps_pressed_and_called_floors
 * - test_prune_is_idempotent
 * - test_skip_if_unneeded
 * - test_insert_and_stop
 * - test_indicator_on_arrival
 * - test_boarding_buffer_flush
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod elevator_tests {
    use crate::controller::Command;
    use crate::elevator::Elevator;
    use crate::shared::{Direction, Floor, Indicator};

    fn setup_floors(n_floors: u8) -> Vec<Floor> {
        (0..n_floors).map(Floor::new).collect()
    }

    fn setup_elevator(floor: u8) -> Elevator {
        let mut elevator = Elevator::new(0, 4, false);
        elevator.record_floor(floor);
        elevator
    }

    #[test]
    fn test_elevator_init() {
        // Arrange + Act
        let elevator = Elevator::new(2, 10, true);

        // Assert
        assert_eq!(elevator.id, 2);
        assert_eq!(elevator.capacity(), 10);
        assert!(elevator.is_large());
        assert!(elevator.is_idle());
        assert_eq!(elevator.current_floor(), 0);
        assert_eq!(elevator.indicator(), Indicator::Both);
    }

    #[test]
    fn test_set_indicator_reports_changes_only() {
        // Arrange
        let mut elevator = setup_elevator(0);
        let mut out = Vec::new();

        // Act
        elevator.set_indicator(Indicator::Up, &mut out);
        elevator.set_indicator(Indicator::Up, &mut out);

        // Assert
        assert_eq!(elevator.indicator(), Indicator::Up);
        assert_eq!(
            out,
            vec![Command::SetIndicator {
                elevator: 0,
                up: true,
                down: false
            }]
        );
    }

    #[test]
    fn test_enqueue_first_destination_sets_direction() {
        // Arrange
        let mut going_up = setup_elevator(2);
        let mut going_down = setup_elevator(7);
        let mut out = Vec::new();

        // Act
        going_up.enqueue(6, &mut out);
        going_down.enqueue(1, &mut out);

        // Assert
        assert_eq!(going_up.indicator(), Indicator::Up);
        assert_eq!(going_down.indicator(), Indicator::Down);
        assert!(out.contains(&Command::UpdateQueue {
            elevator: 0,
            queue: vec![6]
        }));
    }

    #[test]
    fn test_enqueue_sorts_in_committed_direction() {
        // Arrange
        let mut up = setup_elevator(1);
        let mut down = setup_elevator(8);
        let mut out = Vec::new();

        // Act
        for floor in [7, 3, 5, 2] {
            up.enqueue(floor, &mut out);
        }
        for floor in [2, 6, 4, 7] {
            down.enqueue(floor, &mut out);
        }

        // Assert
        assert_eq!(up.destination_queue(), &[2, 3, 5, 7]);
        assert_eq!(down.destination_queue(), &[7, 6, 4, 2]);
    }

    #[test]
    fn test_enqueue_ignores_duplicates() {
        // Arrange
        let mut elevator = setup_elevator(0);
        let mut out = Vec::new();

        // Act
        elevator.enqueue(4, &mut out);
        elevator.enqueue(4, &mut out);

        // Assert
        assert_eq!(elevator.destination_queue(), &[4]);
    }

    #[test]
    fn test_prune_keeps_pressed_and_called_floors() {
        // Arrange
        let mut floors = setup_floors(10);
        let mut elevator = setup_elevator(0);
        let mut out = Vec::new();
        for floor in [3, 5, 8] {
            elevator.enqueue(floor, &mut out);
        }
        floors[5].set_call(Direction::Down, true);
        elevator.record_press(8);
        out.clear();

        // Act
        let changed = elevator.prune(&floors, &mut out);

        // Assert
        assert!(changed);
        assert_eq!(elevator.destination_queue(), &[5, 8]);
        assert_eq!(
            out,
            vec![Command::UpdateQueue {
                elevator: 0,
                queue: vec![5, 8]
            }]
        );
    }

    #[test]
    fn test_prune_is_idempotent() {
        // Arrange
        let mut floors = setup_floors(10);
        let mut elevator = setup_elevator(0);
        let mut out = Vec::new();
        for floor in [2, 4, 6, 9] {
            elevator.enqueue(floor, &mut out);
        }
        floors[6].set_call(Direction::Up, true);
        elevator.record_press(2);

        // Act
        elevator.prune(&floors, &mut out);
        let once = elevator.destination_queue().to_vec();
        let changed = elevator.prune(&floors, &mut out);

        // Assert
        assert!(!changed);
        assert_eq!(elevator.destination_queue(), once.as_slice());
    }

    #[test]
    fn test_skip_if_unneeded() {
        // Arrange
        let floors = setup_floors(10);
        let mut elevator = setup_elevator(4);
        let mut out = Vec::new();
        elevator.enqueue(5, &mut out);
        elevator.enqueue(8, &mut out);
        elevator.record_press(8);
        out.clear();

        // Act
        let skipped = elevator.skip_if_unneeded(5, &floors, &mut out);
        let kept = elevator.skip_if_unneeded(8, &floors, &mut out);

        // Assert
        assert!(skipped);
        assert!(!kept);
        assert_eq!(elevator.destination_queue(), &[8]);
        assert_eq!(
            out,
            vec![Command::UpdateQueue {
                elevator: 0,
                queue: vec![8]
            }]
        );
    }

    #[test]
    fn test_insert_and_stop() {
        // Arrange
        let mut elevator = setup_elevator(3);
        let mut out = Vec::new();
        elevator.enqueue(6, &mut out);
        elevator.enqueue(4, &mut out);
        out.clear();

        // Act
        elevator.insert_and_stop(4, &mut out);

        // Assert
        assert_eq!(elevator.destination_queue(), &[4, 6]);
        assert_eq!(
            out,
            vec![Command::GoToFloor {
                elevator: 0,
                floor: 4,
                stop_now: true
            }]
        );
    }

    #[test]
    fn test_indicator_on_arrival() {
        // Arrange
        let mut elevator = setup_elevator(4);
        let mut out = Vec::new();

        // Act + Assert
        assert_eq!(elevator.indicator_on_arrival(4, 9), Indicator::Both);
        assert_eq!(elevator.indicator_on_arrival(0, 9), Indicator::Up);
        assert_eq!(elevator.indicator_on_arrival(9, 9), Indicator::Down);

        elevator.enqueue(2, &mut out);
        assert_eq!(elevator.indicator_on_arrival(4, 9), Indicator::Down);
        assert_eq!(elevator.indicator_on_arrival(2, 9), Indicator::Both);
    }

    #[test]
    fn test_boarding_buffer_flush() {
        // Arrange
        let mut elevator = Elevator::new(1, 10, true);
        let mut out = Vec::new();
        elevator.buffer_request(6);
        elevator.buffer_request(3);
        elevator.buffer_request(6);

        // Act
        let flushed = elevator.flush_boarding(&mut out);

        // Assert
        assert!(flushed);
        assert!(elevator.boarding_buffer().is_empty());
        assert_eq!(elevator.destination_queue(), &[3, 6]);
        assert_eq!(elevator.indicator(), Indicator::Up);
        assert!(!elevator.flush_boarding(&mut out));
    }
}
