//! Collision ranking over the 2-byte input space.
//!
//! A hash that reduces two bytes to one maps 65536 inputs onto 256 outputs,
//! so every output value is shared by roughly 256 inputs. Those collisions
//! can be put in a fixed order by enumerating the input space first-byte-major
//! (`0x00` sorts below `0xFF`, byte-wise). Instead of storing the second
//! input byte, a caller can then store the input's ordinal position among the
//! colliders of its hash value, which for a well-distributed hash also fits
//! in exactly one byte.

use crate::error::RankError;
use crate::pearson::PearsonHasher;
use serde::{Deserialize, Serialize};

/// Capability contract for 2-byte-to-1-byte hash functions.
///
/// Any reduction of a byte pair to a single byte can back a
/// [`CollisionRanker`]. Implementations must be pure: the same pair must
/// always produce the same output, with no observable side effects.
pub trait PairHasher {
    /// Hashes the two input bytes down to one output byte.
    fn hash_pair(&self, first: u8, second: u8) -> u8;
}

impl<H: PairHasher + ?Sized> PairHasher for &H {
    fn hash_pair(&self, first: u8, second: u8) -> u8 {
        (**self).hash_pair(first, second)
    }
}

/// The sequence hasher satisfies the pair capability by folding the
/// two-element sequence `[first, second]`.
impl PairHasher for PearsonHasher {
    fn hash_pair(&self, first: u8, second: u8) -> u8 {
        self.hash(&[first, second])
    }
}

/// A hash value together with the input's rank among its collisions.
///
/// `rank` is the ordinal position of the input pair among all 2-byte inputs
/// hashing to `hash`, counted in first-byte-major enumeration order: the
/// lexicographically first collider has rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedHash {
    /// The output byte produced by the configured hasher.
    pub hash: u8,
    /// The input's ordinal position among all pairs sharing `hash`.
    pub rank: u8,
}

/// Ranks colliding 2-byte inputs under a fixed enumeration order.
///
/// The ranker owns exactly one [`PairHasher`], chosen at construction and
/// immutable thereafter. All operations are synchronous, read-only, and safe
/// to invoke concurrently; the worst case is a bounded in-memory scan of
/// 65536 hash evaluations.
#[derive(Debug, Clone, Copy)]
pub struct CollisionRanker<H> {
    hasher: H,
}

impl<H: PairHasher> CollisionRanker<H> {
    /// Creates a ranker backed by the given hasher.
    #[must_use]
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns a reference to the configured hasher.
    #[must_use]
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Consumes the ranker and returns the hasher it was built with.
    #[must_use]
    pub fn into_hasher(self) -> H {
        self.hasher
    }

    /// Computes the hash of a pair and its rank among all colliding pairs.
    ///
    /// Fails fast with [`RankError::CollisionOverflow`] when the rank does
    /// not fit in a byte, which means the configured hasher produced more
    /// than 256 collisions for one output value and broke its distribution
    /// contract. For the legacy wraparound behavior see
    /// [`rank_wrapping`](Self::rank_wrapping).
    pub fn rank(&self, first: u8, second: u8) -> Result<RankedHash, RankError> {
        let (hash, offset) = self.scan(first, second);
        let Ok(rank) = u8::try_from(offset) else {
            #[cfg(feature = "tracing-integration")]
            tracing::debug!(hash, offset, "collision counter overflowed a byte");
            return Err(RankError::CollisionOverflow { hash });
        };

        #[cfg(feature = "tracing-integration")]
        tracing::trace!(hash, rank, "collision rank computed");

        Ok(RankedHash { hash, rank })
    }

    /// Computes the hash of a pair and its rank, wrapping the rank modulo 256.
    ///
    /// Compatibility note: this preserves the legacy silent-overflow
    /// behavior, where a contract-violating hasher makes the collision
    /// counter wrap around instead of failing. Under a well-distributed
    /// hasher it agrees with [`rank`](Self::rank) on every pair.
    #[must_use]
    pub fn rank_wrapping(&self, first: u8, second: u8) -> RankedHash {
        let (hash, offset) = self.scan(first, second);
        RankedHash {
            hash,
            rank: offset as u8,
        }
    }

    /// Scans the input space in first-byte-major order and counts colliders
    /// preceding (first, second). Returns the target hash and the exact
    /// collision offset.
    ///
    /// The scan always terminates at (first, second) itself, so the offset
    /// is at most 65535 and fits a `u16`.
    fn scan(&self, first: u8, second: u8) -> (u8, u16) {
        let target = self.hasher.hash_pair(first, second);
        let mut offset = 0u16;
        for candidate_first in 0..=255u8 {
            for candidate_second in 0..=255u8 {
                if self.hasher.hash_pair(candidate_first, candidate_second) != target {
                    continue;
                }
                if candidate_first == first && candidate_second == second {
                    return (target, offset);
                }
                offset += 1;
            }
        }
        unreachable!("the input pair is a member of the enumerated space")
    }
}
