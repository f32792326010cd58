//! Set merging primitives.
//!
//! This crate computes the union of two (or more) containers that hold
//! unique elements. It performs no I/O and has no failure modes: every
//! operation is a pure function of its borrowed inputs and returns a freshly
//! owned container.
//!
//! # Key Types
//!
//! - [`UniqueContainer`] -- an insertable collection that enforces uniqueness
//!   (implemented for `HashSet` and `BTreeSet`)
//! - [`merge_set`] -- union of two containers into a new one
//! - [`merge_all`] / [`merge_into`] -- n-ary and accumulating variants
//! - [`MergeReport`] -- overlap statistics for a two-way merge
//!
//! # Invariants
//!
//! 1. The output holds exactly the elements present in at least one input.
//! 2. No element appears twice in the output.
//! 3. Inputs are never mutated (except the explicit accumulator of
//!    [`merge_into`]).
//! 4. Insertion order is left-then-right, which is only observable for
//!    containers that expose it; the element set never depends on it.

pub mod container;
pub mod merge;
pub mod report;

pub use container::UniqueContainer;
pub use merge::{merge_all, merge_into, merge_set, merge_with_report, SetMergeExt};
pub use report::MergeReport;
