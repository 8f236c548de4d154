//! Credential handling for the Azure DevOps REST API.
//!
//! Azure DevOps authenticates REST calls with a personal access token sent
//! as HTTP basic credentials (empty user name, token as password). The token
//! is held in zeroizing storage and never appears in `Debug` output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use zeroize::Zeroizing;

/// Personal access token credential for Azure DevOps.
///
/// # Examples
///
/// ```
/// use azdo_taskagent_sdk::Credentials;
///
/// let credentials = Credentials::personal_access_token("secret");
/// assert_eq!(format!("{:?}", credentials), "Credentials(<personal access token>)");
/// ```
#[derive(Clone)]
pub struct Credentials {
    token: Zeroizing<String>,
}

impl Credentials {
    /// Create a credential from a personal access token.
    pub fn personal_access_token(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
        }
    }

    /// Produce the `Authorization` header value for a request.
    ///
    /// Azure DevOps expects `Basic` credentials with an empty user name, so
    /// the encoded payload is `:<token>`.
    pub(crate) fn authorization_header(&self) -> String {
        let payload = Zeroizing::new(format!(":{}", self.token.as_str()));
        format!("Basic {}", BASE64.encode(payload.as_bytes()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials(<personal access token>)")
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
