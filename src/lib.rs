//! # Simple and type-safe client for the DNSPod API.
//!
//! Implements a blocking client for the [DNSPod API], covering domain, record
//! and user account operations. Each method maps to one API action: the
//! parameters are sent as a form, and the status block of the JSON response
//! decides between the typed result and an error.
//!
//! ## Examples
//!
//! ```no_run
//! use dnspod::Client;
//! use dnspod::record::{DynamicUpdateOptions, RecordOptions, Type};
//!
//! let client = Client::new("<ID>,<TOKEN>").unwrap();
//!
//! let my_ip = client.my_public_ip().unwrap();
//!
//! let record_id = client
//!     .record()
//!     .create(
//!         "example.com",
//!         Type::A,
//!         &my_ip,
//!         RecordOptions {
//!             sub_domain: Some("home".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//!
//! client
//!     .record()
//!     .dynamic_update(
//!         "example.com",
//!         record_id,
//!         DynamicUpdateOptions {
//!             sub_domain: Some("home".to_string()),
//!             value: Some(my_ip),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//! ```
//!
//! Requests are never retried, and no timeout applies unless one is set with
//! [ClientBuilder::timeout].
//!
//! [DNSPod API]: https://docs.dnspod.cn/api/

mod client;
pub mod domain;
mod errors;
mod payload;
pub mod record;
mod status;
#[cfg(test)]
mod testing;
pub mod transport;
pub mod user;
pub mod wire;

pub use client::*;
pub use errors::*;
pub(crate) use payload::*;
pub use status::{SUCCESS_CODE, Status};
