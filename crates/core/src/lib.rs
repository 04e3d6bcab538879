//! `membergate-core` — shared identity vocabulary.
//!
//! This crate contains **pure** identity primitives (no HTTP, no storage):
//! the `UserId` newtype, the closed `Role` enumeration and the
//! `AccountStatus` lifecycle. Everything else in the gate is built on top
//! of these three types.

pub mod id;
pub mod role;
pub mod status;

pub use id::UserId;
pub use role::{ParseRoleError, Role};
pub use status::{AccountStatus, ParseStatusError};
