//! # overlap-engine
//!
//! Privacy-preserving group availability aggregation for meeting scheduling.
//!
//! A small group coordinates a meeting time without any member seeing another
//! member's full schedule. Each member marks free/busy answers on a
//! date × time-block grid; this engine aggregates those answers across a
//! selected participant subset into per-slot counts and a three-way
//! classification (everyone free / everyone busy / mixed). Only aggregates
//! escape -- individual answers never appear in the output.
//!
//! ## Modules
//!
//! - [`slot`] -- the per-user availability record consumed by the engine
//! - [`overlap`] -- strict (unanimity) aggregation and classification
//! - [`flexible`] -- "at least N of M free" threshold variant
//! - [`display`] -- anonymized count strings, ratio colors, slot ranking
//! - [`grid`] -- date and time-block grid generation for the rendering layer
//! - [`error`] -- error types
//!
//! The engine is pure and stateless: every call aggregates exactly the
//! records it is given and allocates a fresh result. Fetching records and
//! rendering the grid belong to the surrounding application.

pub mod display;
pub mod error;
pub mod flexible;
pub mod grid;
pub mod overlap;
pub mod slot;

pub use error::OverlapError;
pub use flexible::{compute_flexible_overlap, FlexibleOverlapOptions};
pub use overlap::{compute_overlap, compute_overlap_checked, OverlapResults, OverlapSlot};
pub use slot::TimeSlot;
