use http::{header, HeaderMap, Request};
use serde_json::Value;

use crate::error::Error;

pub const AUTHORIZATION: &str = "authorization";

const REQ_REQUIRED: &str = "argument req is required";
const REQ_OBJECT_REQUIRED: &str = "argument req is required to be an object";
const REQ_HEADERS_REQUIRED: &str = "argument req is required to have headers property";

/// Anything that can hand over the `Authorization` header of a request.
///
/// `authorization` distinguishes a caller handing in something that is not a
/// request at all (`Err`) from a request that simply carries no usable
/// credentials (`Ok(None)`).
pub trait AuthorizationSource {
    /// The wrapped request, for context objects that carry one under `req`.
    fn inner_request(&self) -> Option<&dyn AuthorizationSource> {
        None
    }

    fn authorization(&self) -> Result<Option<&str>, Error>;
}

impl AuthorizationSource for HeaderMap {
    fn authorization(&self) -> Result<Option<&str>, Error> {
        Ok(self
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok()))
    }
}

impl<B> AuthorizationSource for Request<B> {
    fn authorization(&self) -> Result<Option<&str>, Error> {
        self.headers().authorization()
    }
}

/// Loosely shaped requests, e.g. `{"headers": {"authorization": "..."}}`, as
/// produced by mocks, fixtures or bridged runtimes.
impl AuthorizationSource for Value {
    fn inner_request(&self) -> Option<&dyn AuthorizationSource> {
        match self.get("req") {
            Some(inner) if is_truthy(inner) => Some(inner),
            _ => None,
        }
    }

    fn authorization(&self) -> Result<Option<&str>, Error> {
        if !is_truthy(self) {
            return Err(Error::invalid_argument(REQ_REQUIRED));
        }

        let req = self
            .as_object()
            .ok_or_else(|| Error::invalid_argument(REQ_OBJECT_REQUIRED))?;

        let authorization = req
            .get("headers")
            .and_then(Value::as_object)
            .and_then(|headers| headers.get(AUTHORIZATION))
            .ok_or_else(|| Error::invalid_argument(REQ_HEADERS_REQUIRED))?;

        Ok(authorization.as_str())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
