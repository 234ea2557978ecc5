//! # Scoring Engine
//!
//! The dimensional scoring core of the interactive-fiction experience.
//! User choices accumulate signed deltas across six psychological axes,
//! and at journey end the accumulated vector is resolved into one of
//! sixteen narrative endings through an ordered rule table.
//!
//! ## Core Components
//!
//! - **scores**: The six-dimension score vector and choice deltas
//! - **rules**: A small recursive predicate language over score vectors
//! - **resolver**: Priority-ordered first-match ending resolution
//! - **feedback**: Dominant-dimension selection and midpoint phrases
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every operation is a synchronous function of its inputs,
//!   with no shared state between calls
//! - **Total**: Resolution never fails for a well-formed vector; the
//!   fallback ending guarantees an answer
//! - **Static configuration**: Rule tables and phrase tables are built
//!   once and validated fail-fast, never mutated at runtime

pub mod feedback;
pub mod resolver;
pub mod rules;
pub mod scores;

pub use feedback::*;
pub use resolver::*;
pub use rules::*;
pub use scores::*;
