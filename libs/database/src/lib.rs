//! Database connectivity for the gig guide services.
//!
//! MongoDB is the only store: events, venues, artists, and subscribers are
//! all document collections. This crate owns connection configuration,
//! startup retry, and the health ping.

pub mod common;
pub mod mongodb;
