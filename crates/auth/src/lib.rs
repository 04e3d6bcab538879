//! `membergate-auth` — authentication boundary of the gate.
//!
//! Turns raw request credentials (session cookie or bearer token) into a
//! resolved [`Session`]. Token signing/verification is self-contained
//! (HS256); the identity store is consumed as an injected trait object,
//! never as ambient global state.

pub mod claims;
pub mod codec;
pub mod error;
pub mod principal;
pub mod resolver;
pub mod store;

pub use claims::{SessionClaims, validate_claims};
pub use codec::TokenCodec;
pub use error::{CredentialError, StoreError};
pub use principal::Principal;
pub use resolver::{RequestCredentials, RevalidationMode, Session, SessionResolver};
pub use store::{AccountRecord, IdentityStore, InMemoryIdentityStore};
