//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde` only).
//! Keep it lean: no I/O, no networking, no heavy logic. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod participant;
pub mod registry;

pub use crate::participant::Participant;
