//! Asset identifier generation

use std::cell::Cell;

use uuid::Uuid;

/// A 128-bit asset identifier, rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(pub u128);

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Source of identifiers for new companion files.
pub trait GuidGenerator {
    fn generate(&self) -> Guid;
}

/// Random version 4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuidGenerator;

impl GuidGenerator for RandomGuidGenerator {
    fn generate(&self) -> Guid {
        Guid(Uuid::new_v4().as_u128())
    }
}

/// Counts up from a starting value; for reproducible output.
#[derive(Debug, Default)]
pub struct SequentialGuidGenerator {
    next: Cell<u128>,
}

impl SequentialGuidGenerator {
    pub fn new(start: u128) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl GuidGenerator for SequentialGuidGenerator {
    fn generate(&self) -> Guid {
        let current = self.next.get();
        self.next.set(current.wrapping_add(1));
        Guid(current)
    }
}
