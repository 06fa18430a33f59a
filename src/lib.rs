//! Colliderank: Pearson-style byte hashing with deterministic collision ranking.
//!
//! # Overview
//!
//! Colliderank is a small, embeddable building block for encoding schemes that
//! compress a 2-byte input into 1 byte and later reconstruct, by brute-force
//! enumeration, which of the (at most 256) colliding inputs was the original.
//! It pairs a table-driven rolling byte hash with a ranking component that
//! reports an input's ordinal position among all 2-byte inputs sharing its
//! hash value, under a fixed first-byte-major enumeration order.
//!
//! # Core Guarantees
//!
//! - **Determinism**: every operation is a pure function of its inputs; the
//!   same input and hasher always produce the same hash and rank
//! - **Fixed ordering**: collision ranks follow lexicographic order on
//!   (first, second) with the first byte as the primary key, and no other
//! - **Bounded work**: ranking terminates before exhausting the 65536-pair
//!   input space because the input pair is itself enumerated
//! - **Explicit overflow policy**: a hasher producing more than 256 collisions
//!   for one output value is a contract violation; [`CollisionRanker::rank`]
//!   fails fast while [`CollisionRanker::rank_wrapping`] preserves the legacy
//!   wraparound
//!
//! # Module Structure
//!
//! - [`table`]: the fixed 256-entry substitution table (external contract)
//! - [`pearson`]: the table-driven sequence hasher
//! - [`rank`]: the pair-hashing capability and collision ranking
//! - [`error`](mod@error): error types
//!
//! # Example
//!
//! ```
//! use colliderank::{CollisionRanker, PearsonHasher};
//!
//! let ranker = CollisionRanker::new(PearsonHasher::new());
//! let ranked = ranker.rank(0x12, 0x34)?;
//! assert_eq!(ranked.hash, PearsonHasher::new().hash(&[0x12, 0x34]));
//! # Ok::<(), colliderank::RankError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod pearson;
pub mod rank;
pub mod table;

// Re-exports for convenient access to core types
pub use error::RankError;
pub use pearson::PearsonHasher;
pub use rank::{CollisionRanker, PairHasher, RankedHash};
pub use table::SUBSTITUTION_TABLE;
