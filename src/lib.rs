//! Client and step-through 3D reveal visualizer for a container packing
//! service.
//!
//! The packing algorithms run behind an external HTTP endpoint; this crate
//! builds the wire requests, binds the responses back onto the session's
//! containers and drives a strictly ordered, reversible reveal of one
//! solution against an abstract scene backend.

pub mod client;
pub mod config;
pub mod geometry;
pub mod model;
pub mod request;
pub mod response;
pub mod reveal;
pub mod session;
pub mod types;
pub mod wire;
