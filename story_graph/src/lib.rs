//! # Story Graph
//!
//! The narrative layer over the [`scoring_engine`]: branching scene
//! content with per-choice score deltas, single-session journey
//! walking, ending display content, and deterministic coverage
//! analysis of the authored story.
//!
//! ## Core Components
//!
//! - **scenes**: Scene and choice definitions plus the reference story
//! - **session**: One user's walk through the story, accumulating scores
//! - **endings**: Display content for the sixteen endings
//! - **coverage**: Exhaustive enumeration of every journey for
//!   reachability and balance checks
//!
//! ## Design Philosophy
//!
//! - **Content as data**: Scenes, choices, and deltas are plain
//!   serializable values validated fail-fast at load
//! - **Session-scoped state**: A journey's score vector lives only in
//!   its [`session::JourneySession`]; restart discards it
//! - **Deterministic**: No randomness anywhere; coverage analysis walks
//!   every combination instead of sampling

pub mod coverage;
pub mod endings;
pub mod scenes;
pub mod session;

pub use coverage::*;
pub use endings::*;
pub use scenes::*;
pub use session::*;
