//! Parsing and formatting of HTTP Basic authentication credentials
//! (RFC 7617).
//!
//! ```
//! use basic_auth::{encode, parse_header, Credentials};
//!
//! let header = encode("foo", "bar");
//! assert_eq!(header, "Basic Zm9vOmJhcg==");
//! assert_eq!(parse_header(&header), Some(Credentials::new("foo", "bar")));
//! assert_eq!(parse_header("Bearer abc"), None);
//! ```

pub mod config;
pub mod credentials;
pub mod decode;
pub mod encode;
pub mod error;
pub mod request;

pub use credentials::Credentials;
pub use decode::{parse_header, parse_request, parse_value};
pub use encode::{challenge, encode, format, format_value};
pub use error::Error;
pub use request::AuthorizationSource;
