//! Core workflows for the shelterfront pet-adoption platform.
//!
//! The crate packages two independent cores: the pet catalog with its pure
//! search/filter/sort pipeline ([`catalog`]) and the multi-step adoption
//! application wizard with advisory screening ([`adoption`]). Both are plain
//! in-memory state machines; persistence, submission delivery, and local
//! flag storage are reached through collaborator traits so callers can
//! substitute fakes.

pub mod adoption;
pub mod catalog;
pub mod config;
pub mod error;
pub mod profile;
pub mod telemetry;
