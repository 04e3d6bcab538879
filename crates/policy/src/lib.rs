//! `membergate-policy` — pure authorization policy (zero I/O).
//!
//! Two pieces: the canonical route table ([`RoutePolicy`]) classifying
//! paths into policy classes, and the decision engine ([`decide`])
//! combining a principal state with a policy class. Both are pure; the
//! transport layer (`membergate-api`) turns decisions into effects.

pub mod decision;
pub mod route;

pub use decision::{Decision, DenyReason, HOME_PATH, LOGIN_PATH, PrincipalState, decide};
pub use route::{PolicyClass, RouteKind, RoutePolicy, RoutePolicyBuilder};
