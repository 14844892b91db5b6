use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::Error;

const CREDENTIALS_REQUIRED: &str = "argument credentials is required";
const CREDENTIALS_FIELDS_REQUIRED: &str =
    "argument credentials is required to have name and pass properties";

/// A userid/password pair carried by the Basic scheme.
///
/// Either half may be empty and `pass` may itself contain colons. The fields
/// are only reachable through accessors, so a value never changes once built.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credentials {
    name: String,
    pass: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: pass.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Compares SHA-256 digests of both fields instead of the raw strings, and
    /// always looks at both fields, so the outcome does not depend on where the
    /// first differing byte sits.
    pub fn matches(&self, expected: &Credentials) -> bool {
        let name_eq =
            Sha256::digest(self.name.as_bytes()) == Sha256::digest(expected.name.as_bytes());
        let pass_eq =
            Sha256::digest(self.pass.as_bytes()) == Sha256::digest(expected.pass.as_bytes());

        name_eq & pass_eq
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("pass", &"<redacted>")
            .finish()
    }
}

impl TryFrom<&Value> for Credentials {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_argument(CREDENTIALS_REQUIRED))?;

        match (text_field(object, "name"), text_field(object, "pass")) {
            (Some(name), Some(pass)) => Ok(Self::new(name, pass)),
            _ => Err(Error::invalid_argument(CREDENTIALS_FIELDS_REQUIRED)),
        }
    }
}

fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}
