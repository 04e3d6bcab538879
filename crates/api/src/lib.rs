//! `membergate-api` — HTTP surface of the authorization gate.
//!
//! The interesting part is [`gate`]: one middleware, one policy table, one
//! decision pipeline for every inbound request. Routes under [`app`] are
//! thin demo surfaces the gate protects.

pub mod app;
pub mod config;
pub mod context;
pub mod cookies;
pub mod gate;
