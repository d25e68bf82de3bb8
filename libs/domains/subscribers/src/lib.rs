//! Subscribers Domain
//!
//! Subscriber records are written by an external signup surface; this
//! system only reads them to send digests. There are no subscribe or
//! unsubscribe endpoints here, and the digest's manage/unsubscribe links
//! point back at that external surface.

mod error;
mod models;
mod mongodb;
mod repository;

pub use error::{Result, SubscriberError};
pub use models::Subscriber;
pub use mongodb::MongoSubscriberRepository;
pub use repository::SubscriberRepository;
