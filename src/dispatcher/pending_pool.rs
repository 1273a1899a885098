/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::IdlePickup;

/**
 * Hall calls no car could take when they were made.
 *
 * Each floor is held at most once and entries keep their arrival order. Idle cars
 * claim entries through [`PendingCallPool::take`]; a claimed entry is gone for good.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingCallPool {
    floors: VecDeque<u8>,
}

impl PendingCallPool {
    pub fn new() -> PendingCallPool {
        PendingCallPool::default()
    }

    /// Adds `floor` unless it is already pooled. Returns whether it was added.
    pub fn push(&mut self, floor: u8) -> bool {
        if self.floors.contains(&floor) {
            return false;
        }
        self.floors.push_back(floor);
        true
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.floors.iter()
    }

    /// Removes and returns the next floor for a car at `from_floor`, chosen by `policy`.
    pub fn take(&mut self, policy: IdlePickup, from_floor: u8) -> Option<u8> {
        let index = match policy {
            IdlePickup::Fifo => 0,
            IdlePickup::Closest => self
                .floors
                .iter()
                .enumerate()
                .min_by_key(|(index, floor)| (floor.abs_diff(from_floor), *index))
                .map(|(index, _)| index)?,
            IdlePickup::Highest => self
                .floors
                .iter()
                .enumerate()
                .max_by_key(|(_, floor)| **floor)
                .map(|(index, _)| index)?,
        };
        self.floors.remove(index)
    }
}
