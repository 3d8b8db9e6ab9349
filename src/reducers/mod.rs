//! Domain reducers.  The root `update.rs` hands every message to each of
//! them in turn until one reports it as handled.

pub mod cart;
pub mod chat;
pub mod theme;
