//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the task variants and their shared completion state.
//! - Provide the ordered list container mutated by the dispatcher.
//!
//! # Invariants
//! - A task's variant is fixed at creation; only the done flag mutates.
//! - Tasks are externally addressed by contiguous 1-based indices.

pub mod list;
pub mod task;
