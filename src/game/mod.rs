//! Core game model for the Monty Hall problem.
//!
//! The model is deliberately small: three doors hide exactly one car and two
//! goats, and a trial is a single pick-reveal-switch-resolve sequence.
//!
//! ## Game Rules
//!
//! - 3 doors, exactly one hides the car
//! - The player picks a door
//! - The host opens one of the other two doors, always revealing a goat
//! - The player either stays or switches to the remaining closed door
//! - The player wins if the final door hides the car
//!
//! ## Why Switching Wins
//!
//! The initial pick is correct with probability 1/3. The host's reveal never
//! moves the car, so staying keeps that 1/3 while switching inherits the
//! complementary 2/3. The [`MontyHall`] simulator in [`monty`] demonstrates
//! this empirically rather than taking the algebra on faith.

use std::fmt;

pub mod monty;

pub use monty::{MontyHall, TrialOutcome};

/// Number of doors in the game.
pub const DOOR_COUNT: usize = 3;

/// What a door hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prize {
    /// The car. Finding it wins the game.
    Car,
    /// A goat. The two goats are indistinguishable; win/loss only depends
    /// on car vs. not-car.
    Goat,
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Car => write!(f, "car"),
            Prize::Goat => write!(f, "goat"),
        }
    }
}

/// A door number, 1-indexed as in the puzzle's usual statement.
///
/// Construction is checked: door numbers outside {1, 2, 3} are a programming
/// error, not a runtime condition, and panic immediately rather than feeding
/// bad indices into the tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door(u8);

impl Door {
    /// All three doors in order.
    pub const ALL: [Door; DOOR_COUNT] = [Door(1), Door(2), Door(3)];

    /// Create a door from its 1-indexed number.
    ///
    /// # Panics
    /// Panics if `number` is not in {1, 2, 3}.
    pub fn new(number: u8) -> Self {
        assert!(
            (1..=DOOR_COUNT as u8).contains(&number),
            "door number {} out of range 1..={}",
            number,
            DOOR_COUNT
        );
        Door(number)
    }

    /// Create a door from a 0-indexed position.
    ///
    /// # Panics
    /// Panics if `index` is not in {0, 1, 2}.
    pub fn from_index(index: usize) -> Self {
        assert!(index < DOOR_COUNT, "door index {} out of range", index);
        Door(index as u8 + 1)
    }

    /// The 1-indexed door number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-indexed storage position.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door{}", self.0)
    }
}

/// One assignment of prizes to the three door positions.
///
/// Exactly one position holds the car. Arrangements are drawn fresh for each
/// trial from [`Arrangement::ALL`] and never mutated, so win determination is
/// always against the trial's own arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    prizes: [Prize; DOOR_COUNT],
}

impl Arrangement {
    /// Every valid arrangement: the car behind door 3, 2, and 1 respectively.
    ///
    /// A static table indexed by a uniform draw is all the "shuffling" this
    /// game needs.
    pub const ALL: [Arrangement; 3] = [
        Arrangement {
            prizes: [Prize::Goat, Prize::Goat, Prize::Car],
        },
        Arrangement {
            prizes: [Prize::Goat, Prize::Car, Prize::Goat],
        },
        Arrangement {
            prizes: [Prize::Car, Prize::Goat, Prize::Goat],
        },
    ];

    /// The prize behind the given door.
    pub fn prize_at(&self, door: Door) -> Prize {
        self.prizes[door.index()]
    }

    /// True when the given door hides the car.
    pub fn is_winner(&self, door: Door) -> bool {
        self.prize_at(door) == Prize::Car
    }

    /// The unique door hiding the car.
    pub fn winning_door(&self) -> Door {
        // Exactly one car per arrangement by construction of ALL.
        let index = self
            .prizes
            .iter()
            .position(|p| *p == Prize::Car)
            .expect("arrangement has no car");
        Door::from_index(index)
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.prizes[0], self.prizes[1], self.prizes[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_indexing_round_trip() {
        for number in 1..=3u8 {
            let door = Door::new(number);
            assert_eq!(door.number(), number);
            assert_eq!(door.index(), number as usize - 1);
            assert_eq!(Door::from_index(door.index()), door);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_door_zero_rejected() {
        Door::new(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_door_four_rejected() {
        Door::new(4);
    }

    #[test]
    fn test_every_arrangement_has_exactly_one_winner() {
        for arrangement in Arrangement::ALL {
            let winners: Vec<Door> = Door::ALL
                .into_iter()
                .filter(|d| arrangement.is_winner(*d))
                .collect();
            assert_eq!(winners.len(), 1, "arrangement {} has {} winners", arrangement, winners.len());
            assert_eq!(winners[0], arrangement.winning_door());
        }
    }

    #[test]
    fn test_winning_door_positions() {
        assert_eq!(Arrangement::ALL[0].winning_door(), Door::new(3));
        assert_eq!(Arrangement::ALL[1].winning_door(), Door::new(2));
        assert_eq!(Arrangement::ALL[2].winning_door(), Door::new(1));
    }

    #[test]
    fn test_arrangement_display() {
        assert_eq!(Arrangement::ALL[2].to_string(), "(car, goat, goat)");
    }
}
