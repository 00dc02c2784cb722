//! Request Generations
//!
//! Monotonic counter used to drop responses and timers that were superseded
//! by a newer request.

/// Latest issued generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Issue the next generation and return it as a ticket
    pub fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Whether `ticket` is still the latest issued generation
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
