//! Permissive URL splitting, percent-encoding and reassembly.
//!
//! Raw URLs as they appear in markup, redirects and logs are split into
//! scheme, userinfo, host, port, path, query and fragment without any
//! validation. The only rejected input is one that starts with `:`.
//!
//! ```
//! let url = rawurl::parse("https://user@[2001:db8::1]:8443/a%20b?x=1#top")?;
//! assert_eq!(url.host, "2001:db8::1");
//! assert!(url.ipv6);
//! assert_eq!(rawurl::decode(&url.path), "/a b");
//! assert_eq!(url.to_string(), "https://user@[2001:db8::1]:8443/a%20b?x=1#top");
//! # Ok::<(), rawurl::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod parser;
mod scheme;
mod types;
mod unicode;
mod url;

// Public API
pub use character_sets::{is_digit, is_hex_digit, is_letter};
pub use error::{ParseError, Result};
pub use parser::parse;
pub use types::SchemeType;
pub use unicode::percent_decode::{decode, decode_bytes};
pub use unicode::percent_encode::{encode, encode_bytes};
pub use url::Url;
