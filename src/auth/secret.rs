use super::AuthError;

/// Decides whether a caller-supplied key grants access.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: Option<&[u8]>) -> Result<(), AuthError>;
}

/// A single process-wide shared secret compared byte for byte.
///
/// With no secret configured every caller is rejected, including callers that
/// send no key at all.
pub struct StaticSecret {
    expected: Option<String>,
}

impl StaticSecret {
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }
}

impl CredentialVerifier for StaticSecret {
    fn verify(&self, supplied: Option<&[u8]>) -> Result<(), AuthError> {
        let expected = self.expected.as_deref().ok_or(AuthError::NotConfigured)?;
        let supplied = supplied.ok_or(AuthError::MissingKey)?;

        if supplied == expected.as_bytes() {
            Ok(())
        } else {
            Err(AuthError::InvalidKey)
        }
    }
}
