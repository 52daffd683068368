//! Single-attempt delivery of form payloads to the site's form relay.
//!
//! [`NotificationChannel`] is the seam the form controller talks to;
//! [`RelayClient`] is the production implementation backed by `reqwest`.

pub mod channel;
pub mod client;
pub mod error;

pub use channel::{Encoding, NotificationChannel};
pub use client::RelayClient;
pub use error::RelayError;
