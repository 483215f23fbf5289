//! Error handling and exit codes.

use coinpane_core::constants::exit_codes;

use crate::config::ConfigError;

/// Exit code for an error returned by [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let config = anyhow::Error::new(ConfigError::InvalidTimeout("x".into()));
        assert_eq!(exit_code(&config), 4);
        assert_eq!(exit_code(&anyhow::anyhow!("offline")), 1);
    }

    #[test]
    fn context_keeps_config_code() {
        let err = anyhow::Error::new(ConfigError::InvalidTimeout("x".into())).context("startup");
        assert_eq!(exit_code(&err), 4);
    }
}
