//! Quadrature transition table.
//!
//! The table is indexed by `(old << 2) | new` where both halves are raw channel states.
//! Turning forward the channels walk `00 -> 01 -> 11 -> 10 -> 00`.
//!
//! ```md
//!  key    step
//!  ----:------
//!  0001 :  +1   [..] -> [.H]
//!  0111 :  +1   [.H] -> [HH]
//!  1110 :  +1   [HH] -> [H.]
//!  1000 :  +1   [H.] -> [..]
//!  0010 :  -1   [..] -> [H.]
//!  1011 :  -1   [H.] -> [HH]
//!  1101 :  -1   [HH] -> [.H]
//!  0100 :  -1   [.H] -> [..]
//!  else :   0   no movement, or both channels changed at once
//! ```
use crate::state::InputState;

/// Raw channel states in the order they are visited when turning forward.
pub const FORWARD_CYCLE: [u8; 4] = [0b00, 0b01, 0b11, 0b10];

/// Signed step for every transition key.
pub const TRANSITION_TABLE: [i8; 16] = build_table();

const fn build_table() -> [i8; 16] {
    let mut table = [0; 16];
    let mut i = 0;
    while i < FORWARD_CYCLE.len() {
        let from = FORWARD_CYCLE[i];
        let to = FORWARD_CYCLE[(i + 1) % FORWARD_CYCLE.len()];
        table[((from << 2) | to) as usize] = 1;
        table[((to << 2) | from) as usize] = -1;
        i += 1;
    }
    table
}

pub fn transition_key(old: InputState, new: InputState) -> usize {
    usize::from((old.bits() << 2) | new.bits())
}

/// Step taken when the input moves from `old` to `new`.
///
/// Skipped transitions (both channels changed) yield 0. The direction of a skip is not guessed.
pub fn delta(old: InputState, new: InputState) -> i8 {
    TRANSITION_TABLE[transition_key(old, new)]
}

#[cfg(test)]
mod tests {
    use super::{TRANSITION_TABLE, delta, transition_key};
    use crate::state::InputState;

    const FORWARD_KEYS: [usize; 4] = [0b0001, 0b0111, 0b1110, 0b1000];
    const REVERSE_KEYS: [usize; 4] = [0b0010, 0b1011, 0b1101, 0b0100];

    #[test]
    fn forward_pairs_step_up() {
        for key in FORWARD_KEYS {
            assert_eq!(TRANSITION_TABLE[key], 1, "key {key:04b}");
        }
    }

    #[test]
    fn reverse_pairs_step_down() {
        for key in REVERSE_KEYS {
            assert_eq!(TRANSITION_TABLE[key], -1, "key {key:04b}");
        }
    }

    #[test]
    fn everything_else_is_zero() {
        for key in 0..16 {
            if FORWARD_KEYS.contains(&key) || REVERSE_KEYS.contains(&key) {
                continue;
            }
            assert_eq!(TRANSITION_TABLE[key], 0, "key {key:04b}");
        }
        assert_eq!(TRANSITION_TABLE.iter().filter(|step| **step == 0).count(), 8);
    }

    #[test]
    fn key_layout() {
        assert_eq!(transition_key(InputState::new(0b11), InputState::new(0b10)), 0b1110);
        assert_eq!(delta(InputState::new(0b11), InputState::new(0b10)), 1);
        assert_eq!(delta(InputState::new(0b00), InputState::new(0b11)), 0);
        assert_eq!(delta(InputState::new(0b01), InputState::new(0b10)), 0);
    }
}
