//! Lookahead buffer for strike and spare bonuses
//!
//! Holds the two most recently seen roll values while the frames are scanned
//! from last to first. A strike is owed the next two deliveries and a spare
//! the next one, so nothing older than two rolls is ever needed.

/// Number of future deliveries a bonus can depend on
pub const LOOKAHEAD: usize = 2;

/// Fixed-size ring buffer of roll values
///
/// The most recently pushed value is the delivery nearest in play order to
/// the frame being examined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BonusWindow {
    slots: [u8; LOOKAHEAD],
    // Slot the next push writes to
    cursor: usize,
    len: usize,
}

impl BonusWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a roll, evicting the oldest value when full
    pub fn push(&mut self, pins: u8) {
        self.slots[self.cursor] = pins;
        self.cursor = (self.cursor + 1) % LOOKAHEAD;
        self.len = (self.len + 1).min(LOOKAHEAD);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The delivery immediately following the frame under examination
    pub fn next_roll(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        Some(self.slots[(self.cursor + LOOKAHEAD - 1) % LOOKAHEAD])
    }

    /// Sum of the next two deliveries, once both are known
    pub fn next_two_rolls(&self) -> Option<u16> {
        if self.len < LOOKAHEAD {
            return None;
        }
        // With a full buffer the cursor sits on the older of the two values
        let nearest = self.slots[(self.cursor + LOOKAHEAD - 1) % LOOKAHEAD];
        let following = self.slots[self.cursor];
        Some(u16::from(nearest) + u16::from(following))
    }
}
