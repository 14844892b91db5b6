use std::fs;

use serde::Deserialize;

use crate::{credentials::Credentials, decode::parse_header, encode::challenge, error::Error};

/// Settings for checking a request's credentials from the command line.
#[derive(Deserialize, PartialEq, Debug)]
pub struct Config {
    #[serde(default = "default_realm")]
    pub realm: String,
    /// Accept every request, with or without credentials.
    #[serde(rename = "unsafe", default)]
    pub allow_all: bool,
    pub credentials: Option<Credentials>,
    /// Request paths let through without credentials.
    #[serde(default)]
    pub whitelist: Vec<String>,
}

fn default_realm() -> String {
    "localhost".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            realm: default_realm(),
            allow_all: false,
            credentials: None,
            whitelist: Vec::new(),
        }
    }
}

impl Config {
    pub fn read_from_toml_file(filename: &str) -> Result<Config, Error> {
        let contents = fs::read_to_string(filename)?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(source: &str) -> Result<Config, Error> {
        let config: Self = toml::from_str(source)?;
        Ok(config)
    }

    /// Decides whether a request for `path` carrying `supplied` credentials is
    /// let through.
    pub fn accepts(&self, path: Option<&str>, supplied: Option<&Credentials>) -> bool {
        if self.allow_all {
            return true;
        }

        if let Some(path) = path {
            if self.whitelist.iter().any(|p| p == path) {
                log::debug!("Path {path} is whitelisted");
                return true;
            }
        }

        match (supplied, &self.credentials) {
            (Some(supplied), Some(expected)) => supplied.matches(expected),
            _ => false,
        }
    }

    /// Checks the `Authorization` header value of a request for `path`.
    ///
    /// A rejection is [`Error::Unauthorized`] holding the `WWW-Authenticate`
    /// value for this realm.
    pub fn check(&self, path: Option<&str>, header: &str) -> Result<(), Error> {
        let supplied = parse_header(header);

        if self.accepts(path, supplied.as_ref()) {
            log::info!("Accepted request for realm {}", self.realm);
            return Ok(());
        }

        match supplied {
            Some(credentials) => {
                log::warn!("Rejected credentials for user {:?}", credentials.name())
            }
            None => log::warn!("No valid credentials supplied"),
        }

        Err(Error::Unauthorized(challenge(&self.realm)))
    }
}
