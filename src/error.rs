//! Error types for collision ranking.
//!
//! Both hash operations are total over well-typed byte inputs and cannot
//! fail. The one failure mode lives in the ranking layer: a supplied hasher
//! that violates its distribution contract.

use thiserror::Error;

/// Error emitted when a hasher violates the collision-ranking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// The hasher produced more than 256 colliding pairs for one output
    /// value, so the collision rank does not fit in a byte. A well
    /// distributed 2-byte-to-1-byte reduction yields exactly 256 collisions
    /// per output value and can never hit this.
    #[error("hasher produced more than 256 collisions for hash value {hash:#04x}")]
    CollisionOverflow {
        /// The output value whose collision count overflowed.
        hash: u8,
    },
}
