// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A toast call was made while no provider is mounted in the scope.
    #[error("toast call made outside of a mounted provider scope")]
    OutsideProvider,

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config Error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(inner) => assert!(inner.to_string().contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io(std::io::Error::other("disk failure"));
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn outside_provider_mentions_scope() {
        let message = Error::OutsideProvider.to_string();
        assert!(message.contains("provider scope"));
    }

    #[test]
    fn toml_parse_error_converts_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.to_string().starts_with("Config Error:"));
    }
}
