use base64::{engine::general_purpose, Engine};
use serde_json::Value;

use crate::{credentials::Credentials, error::Error};

/// Builds an `Authorization` header value from a userid and password.
///
/// An empty `pass` drops the `:` separator and only `name` is encoded. Use
/// [`format`] when the strict `userid ":" password` form is required.
pub fn encode(name: &str, pass: &str) -> String {
    let separator = if pass.is_empty() { "" } else { ":" };

    basic_header(&format!("{name}{separator}{pass}"))
}

/// Builds an `Authorization` header value that always carries the separator,
/// so that it parses back into the same credentials.
pub fn format(credentials: &Credentials) -> String {
    basic_header(&format!("{}:{}", credentials.name(), credentials.pass()))
}

/// [`format`] for a dynamically typed `{"name": .., "pass": ..}` value.
pub fn format_value(value: &Value) -> Result<String, Error> {
    let credentials = Credentials::try_from(value)?;

    Ok(format(&credentials))
}

/// Value of a `WWW-Authenticate` header asking for Basic credentials.
pub fn challenge(realm: &str) -> String {
    let mut quoted = String::with_capacity(realm.len());
    for c in realm.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }

    format!("Basic realm=\"{quoted}\"")
}

fn basic_header(user_pass: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(user_pass);
    format!("Basic {encoded}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::decode::parse_header;

    #[test]
    fn test_encode() {
        assert_eq!(encode("foo", "bar"), "Basic Zm9vOmJhcg==");
    }

    #[test]
    fn test_encode_empty_pass_omits_separator() {
        assert_eq!(encode("user", ""), "Basic dXNlcg==");
        assert_eq!(parse_header(&encode("user", "")), None);
    }

    #[test]
    fn test_encode_empty_name() {
        assert_eq!(encode("", "pass"), "Basic OnBhc3M=");
    }

    #[test]
    fn test_encode_round_trip() {
        let cases = [
            ("foo", "bar"),
            ("", "pass"),
            ("foo", "pass:word"),
            ("user@domain", "p@ss:word!"),
            ("jöhn", "pässwörd"),
            ("foo", " "),
        ];

        for (name, pass) in cases {
            let parsed = parse_header(&encode(name, pass));
            assert_eq!(parsed, Some(Credentials::new(name, pass)), "{name}");
        }
    }

    #[test]
    fn test_encode_known_value() {
        // RFC 7617 example
        assert_eq!(encode("Aladdin", "open sesame"), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_format() {
        assert_eq!(format(&Credentials::new("foo", "bar")), "Basic Zm9vOmJhcg==");
        assert_eq!(format(&Credentials::new("foo", "")), "Basic Zm9vOg==");
        assert_eq!(format(&Credentials::new("", "pass")), "Basic OnBhc3M=");
        assert_eq!(format(&Credentials::new("", "")), "Basic Og==");
    }

    #[test]
    fn test_format_round_trip() {
        for creds in [
            Credentials::new("foo", ""),
            Credentials::new("", ""),
            Credentials::new("foo", "pass:word"),
        ] {
            assert_eq!(parse_header(&format(&creds)), Some(creds));
        }
    }

    #[test]
    fn test_format_value() {
        let header = format_value(&json!({ "name": "foo", "pass": "bar" }));

        assert!(header.is_ok());
        assert_eq!(header.unwrap(), "Basic Zm9vOmJhcg==");
    }

    #[test]
    fn test_format_value_rejects_invalid_credentials() {
        let values = [
            json!(null),
            json!(42),
            json!(""),
            json!({ "pass": "bar" }),
            json!({ "name": "foo" }),
            json!({ "name": 42, "pass": "bar" }),
            json!({ "name": "foo", "pass": 42 }),
        ];

        for value in values {
            let err = format_value(&value).unwrap_err();
            let Error::InvalidArgument(ref msg) = err else {
                panic!("expected an invalid argument error, got {err:?}");
            };
            assert!(msg.starts_with("argument credentials is required"));
        }
    }

    #[test]
    fn test_challenge() {
        assert_eq!(challenge("madeupsite.com"), "Basic realm=\"madeupsite.com\"");
        assert_eq!(challenge("Some\"Realm\\"), "Basic realm=\"Some\\\"Realm\\\\\"");
    }
}
