// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::application::port::script::ScriptError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    UnsupportedLocale(String),
    Script(ScriptError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnsupportedLocale(tag) => write!(f, "Unsupported locale: {}", tag),
            Error::Script(e) => write!(f, "Script Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ScriptError> for Error {
    fn from(err: ScriptError) -> Self {
        Error::Script(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn unsupported_locale_names_the_tag() {
        let err = Error::UnsupportedLocale("de".to_string());
        assert_eq!(format!("{}", err), "Unsupported locale: de");
    }

    #[test]
    fn from_script_error_produces_script_variant() {
        let err: Error = ScriptError::NotFound("ru.js".to_string()).into();
        match err {
            Error::Script(ScriptError::NotFound(script)) => assert_eq!(script, "ru.js"),
            _ => panic!("expected Script variant"),
        }
    }
}
