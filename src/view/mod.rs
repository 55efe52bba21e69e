//! Plain-text rendering of state snapshots. Every renderer is a pure
//! function of its inputs; rows are keyed by entity id.

pub mod appointments;
pub mod calendar;
pub mod doctors;
pub mod slots;
