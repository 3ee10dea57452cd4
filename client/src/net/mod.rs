//! Networking configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` maps backend operations to absolute URLs and assembles the
//! bearer-auth headers every request carries.

pub mod endpoints;
