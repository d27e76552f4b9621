//! Credentials management infrastructure
//!
//! The GitHub token is only ever read from the environment.

use tracing::debug;

use crate::domain::models::Credential;
use crate::domain::PublishError;

/// Environment variable holding the GitHub bearer token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Read the GitHub token from `GITHUB_TOKEN`
///
/// Unset, empty, or whitespace-only values are a configuration error.
pub fn resolve_credential() -> Result<Credential, PublishError> {
    let credential = std::env::var(TOKEN_ENV_VAR)
        .ok()
        .and_then(Credential::new)
        .ok_or_else(|| {
            PublishError::Configuration(format!("{TOKEN_ENV_VAR} not found in environment"))
        })?;

    debug!(variable = TOKEN_ENV_VAR, "credential resolved");
    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token() {
        let result = temp_env::with_var_unset(TOKEN_ENV_VAR, resolve_credential);

        match result {
            Err(PublishError::Configuration(msg)) => {
                assert_eq!(msg, "GITHUB_TOKEN not found in environment");
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_token() {
        let result = temp_env::with_var(TOKEN_ENV_VAR, Some("  "), resolve_credential);
        assert!(matches!(result, Err(PublishError::Configuration(_))));
    }

    #[test]
    fn test_token_present() {
        let credential = temp_env::with_var(TOKEN_ENV_VAR, Some("ghp_example"), resolve_credential)
            .expect("token should resolve");
        assert_eq!(credential.expose(), "ghp_example");
    }
}
