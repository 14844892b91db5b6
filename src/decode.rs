use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use regex::Regex;
use serde_json::Value;

use crate::{credentials::Credentials, error::Error, request::AuthorizationSource};

// credentials = auth-scheme 1*SP token68
// auth-scheme = "Basic" ; case insensitive
// token68     = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
//
// Scheme letters are spelled out as ASCII classes: `(?i)` would also let
// Unicode case folding (U+017F for "s") through.
const CREDENTIALS_PATTERN: &str = r"^ *[Bb][Aa][Ss][Ii][Cc] +([A-Za-z0-9._~+/-]+=*) *$";

// user-pass = userid ":" password
// userid    = *<TEXT excluding ":">
// password  = *TEXT
//
// `(?s)` so line breaks in the password are kept like any other character.
const USER_PASS_PATTERN: &str = r"(?s)^([^:]*):(.*)$";

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reads the Basic credentials of a request.
///
/// A context object exposing a nested request is resolved to that request
/// first. Values that are not requests at all are reported as
/// [`Error::InvalidArgument`]; a request without usable credentials is
/// `Ok(None)`.
pub fn parse_request<R>(req: &R) -> Result<Option<Credentials>, Error>
where
    R: AuthorizationSource + ?Sized,
{
    let authorization = match req.inner_request() {
        Some(inner) => inner.authorization()?,
        None => req.authorization()?,
    };

    Ok(authorization.and_then(parse_header))
}

/// Parses an `Authorization` header value of the form `Basic <token68>`.
///
/// Returns `None` for anything that is not well formed Basic credentials.
pub fn parse_header(header: &str) -> Option<Credentials> {
    let token = credentials_token(header)?;
    let decoded = decode_token(token)?;

    split_user_pass(&decoded)
}

/// Like [`parse_header`], for dynamically typed input. Non-string values are
/// `None`.
pub fn parse_value(value: &Value) -> Option<Credentials> {
    value.as_str().and_then(parse_header)
}

fn credentials_token(header: &str) -> Option<&str> {
    let re = Regex::new(CREDENTIALS_PATTERN).ok()?;
    match re.captures(header) {
        Some(m) => Some(m.get(1)?.as_str()),
        _ => {
            log::debug!("Authorization header is not a Basic token68 credential");
            None
        }
    }
}

fn decode_token(token: &str) -> Option<String> {
    // token68 allows any run of trailing "=", padding is optional after that
    let token = token.trim_end_matches('=');
    let bytes = match TOKEN_ENGINE.decode(token) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Basic token is not valid base64: {e}");
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(decoded) => Some(decoded),
        Err(_) => {
            log::debug!("Basic token does not decode to UTF-8 text");
            None
        }
    }
}

fn split_user_pass(decoded: &str) -> Option<Credentials> {
    let re = Regex::new(USER_PASS_PATTERN).ok()?;
    match re.captures(decoded) {
        Some(m) => {
            let name = m.get(1)?.as_str();
            let pass = m.get(2)?.as_str();

            Some(Credentials::new(name, pass))
        }
        _ => {
            log::debug!("Decoded Basic credentials have no userid/password separator");
            None
        }
    }
}
