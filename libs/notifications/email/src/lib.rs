//! Email delivery for the gig guide digest.
//!
//! ## Components
//!
//! - **Models**: [`Email`], the message to be sent
//! - **Providers**: AWS SES v2 ([`SesProvider`]) and a capturing
//!   [`MockEmailProvider`] for tests
//! - **Digest**: Handlebars rendering of the subscriber digest and the
//!   base64 email tokens its manage/unsubscribe links carry

pub mod digest;
pub mod models;
pub mod provider;

pub use digest::{DigestEvent, build_digest_email, email_token, render_digest};
pub use models::Email;
pub use provider::{EmailProvider, MockEmailProvider, SendResult, SesProvider};
