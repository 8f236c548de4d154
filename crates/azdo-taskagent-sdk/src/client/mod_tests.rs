//! Tests for client configuration and construction.

use super::*;

mod client_config_tests {
    use super::*;

    /// Verify the default configuration targets the public service.
    #[test]
    fn test_default_configuration() {
        let config = ClientConfig::default();

        assert_eq!(config.organization_url, "https://dev.azure.com");
        assert_eq!(config.api_version, "7.1-preview.1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "azdo-taskagent-sdk/0.1.0");
    }

    /// Verify the with_* methods replace individual fields.
    #[test]
    fn test_with_methods() {
        let config = ClientConfig::default()
            .with_organization_url("https://dev.azure.com/my-org")
            .with_api_version("6.0-preview.1")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("custom-agent/1.0");

        assert_eq!(config.organization_url, "https://dev.azure.com/my-org");
        assert_eq!(config.api_version, "6.0-preview.1");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }

    /// Verify the builder produces the same result as the with_* methods.
    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .organization_url("https://dev.azure.com/my-org")
            .api_version("6.0-preview.1")
            .timeout(Duration::from_secs(10))
            .user_agent("custom-agent/1.0")
            .build();

        assert_eq!(config.organization_url, "https://dev.azure.com/my-org");
        assert_eq!(config.api_version, "6.0-preview.1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }
}

mod task_agent_client_tests {
    use super::*;

    fn test_client(organization_url: &str) -> TaskAgentClient {
        TaskAgentClient::builder(Credentials::personal_access_token("test-pat"))
            .config(ClientConfig::default().with_organization_url(organization_url))
            .build()
            .unwrap()
    }

    /// Verify endpoint URLs carry the organization, route, and API version.
    #[test]
    fn test_endpoint_construction() {
        let client = test_client("https://dev.azure.com/my-org");

        let url = client.endpoint("_apis/distributedtask/pools/9").unwrap();
        assert_eq!(
            url.as_str(),
            "https://dev.azure.com/my-org/_apis/distributedtask/pools/9?api-version=7.1-preview.1"
        );
    }

    /// Verify a trailing slash on the organization URL does not double up.
    #[test]
    fn test_endpoint_trailing_slash() {
        let client = test_client("https://dev.azure.com/my-org/");

        let url = client
            .endpoint("proj/_apis/distributedtask/queues/42")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dev.azure.com/my-org/proj/_apis/distributedtask/queues/42?api-version=7.1-preview.1"
        );
    }

    /// Verify an unparseable organization URL surfaces as a configuration error.
    #[test]
    fn test_endpoint_invalid_organization_url() {
        let client = test_client("not a url");

        let error = client
            .endpoint("_apis/distributedtask/pools/9")
            .expect_err("invalid base URL must not produce an endpoint");
        assert!(matches!(error, ApiError::Configuration { .. }));
    }

    /// Verify the client builder falls back to the default configuration.
    #[test]
    fn test_builder_default_config() {
        let client = TaskAgentClient::builder(Credentials::personal_access_token("test-pat"))
            .build()
            .unwrap();

        assert_eq!(client.config().organization_url, "https://dev.azure.com");
    }

    /// Verify Debug output never contains the personal access token.
    #[test]
    fn test_debug_redacts_credentials() {
        let client = test_client("https://dev.azure.com/my-org");

        let debug = format!("{:?}", client);
        assert!(!debug.contains("test-pat"));
        assert!(debug.contains("<personal access token>"));
    }
}
