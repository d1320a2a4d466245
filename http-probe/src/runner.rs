use crate::client::ProbeClient;
use crate::config::ProbeConfig;
use crate::error::{ClientError, ProbeError};
use crate::resource::ResourceLock;
use crate::transport::Transport;
use std::sync::Arc;

/// Terminal state of one probe cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 200 answer carrying its body
    Success { body: String },
    /// 500 answer
    ServerError,
    /// 418 answer
    Teapot,
    /// Any other 4xx answer
    Unauthorized,
    /// Non-200 status outside the carved-out bands, with its message
    HttpFailure { message: String },
    /// The request never produced a response
    NoResponse,
}

impl Outcome {
    /// Whether the cycle counts as successful
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The single stable line describing this outcome
    pub fn line(&self) -> String {
        match self {
            Self::Success { body } => format!("Response: 200 OK, Body: {body}"),
            Self::ServerError => "Response: 500 Internal Server Error".to_string(),
            Self::Teapot => "Response: 418 I'm a teapot (RFC 2324)".to_string(),
            Self::Unauthorized => "Response: 401 Unauthorized".to_string(),
            Self::HttpFailure { message } => message.clone(),
            Self::NoResponse => "No Response".to_string(),
        }
    }

    /// Short stable name for machine-readable output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::ServerError => "server-error",
            Self::Teapot => "teapot",
            Self::Unauthorized => "unauthorized",
            Self::HttpFailure { .. } => "http-failure",
            Self::NoResponse => "no-response",
        }
    }
}

/// Drives one probe cycle: lock, request, classify, recover
pub struct Runner<T> {
    client: ProbeClient<T>,
    lock: Arc<ResourceLock>,
}

impl<T: Transport> Runner<T> {
    /// Create a runner with its own resource lock
    pub fn new(config: ProbeConfig, transport: T) -> Self {
        Self::with_lock(config, transport, Arc::new(ResourceLock::new()))
    }

    /// Create a runner over a shared resource lock
    pub fn with_lock(config: ProbeConfig, transport: T, lock: Arc<ResourceLock>) -> Self {
        Self {
            client: ProbeClient::new(config, transport),
            lock,
        }
    }

    /// Run one probe cycle to its terminal outcome.
    ///
    /// Never fails: every error the cycle can produce maps to a terminal
    /// `Outcome`, so nothing propagates past this boundary. The resource is
    /// held for the whole cycle and released on every path out.
    pub async fn run(&self) -> Outcome {
        let _guard = self.lock.acquire().await;

        let config = self.client.config();
        match self.client.send_get(&config.path, &config.params).await {
            Ok(body) => Outcome::Success { body },
            Err(error) => Self::recover(error),
        }
    }

    /// Map a failed cycle onto its terminal outcome.
    ///
    /// Arm order runs from most specific kind to least; it mirrors the
    /// classification precedence, and reordering would change which outcome
    /// a given status resolves to.
    fn recover(error: ProbeError) -> Outcome {
        match error {
            ProbeError::Server { .. } => Outcome::ServerError,
            ProbeError::Client(ClientError::Teapot { .. }) => Outcome::Teapot,
            ProbeError::Client(_) => Outcome::Unauthorized,
            generic @ ProbeError::UnexpectedStatus { .. } => Outcome::HttpFailure {
                message: generic.to_string(),
            },
            _ => Outcome::NoResponse,
        }
    }

    /// The configuration behind this runner
    pub fn config(&self) -> &ProbeConfig {
        self.client.config()
    }

    /// The lock guarding this runner's cycles
    pub fn lock(&self) -> &ResourceLock {
        &self.lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::ScriptedTransport;
    use std::collections::HashMap;

    fn test_config() -> ProbeConfig {
        ProbeConfig {
            base_url: "https://api.example.com".to_string(),
            path: "/invoice/534".to_string(),
            user_agent: "probe-tests/1.0".to_string(),
            timeout_seconds: None,
            follow_redirects: None,
            params: HashMap::new(),
            seed: None,
        }
    }

    async fn run_scripted(transport: ScriptedTransport) -> Outcome {
        Runner::new(test_config(), transport).run().await
    }

    #[tokio::test]
    async fn status_200_ends_in_success_with_the_body() {
        let outcome =
            run_scripted(ScriptedTransport::new().with_status(200, "Lorem ipsum")).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.line(), "Response: 200 OK, Body: Lorem ipsum");
    }

    #[tokio::test]
    async fn status_500_ends_in_the_server_outcome() {
        let outcome = run_scripted(ScriptedTransport::new().with_status(500, "")).await;

        assert_eq!(outcome, Outcome::ServerError);
        assert_eq!(outcome.line(), "Response: 500 Internal Server Error");
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn status_418_takes_the_teapot_branch_not_the_generic_client_one() {
        let outcome =
            run_scripted(ScriptedTransport::new().with_status(418, "I really am a teapot")).await;

        assert_eq!(outcome, Outcome::Teapot);
        assert_eq!(outcome.line(), "Response: 418 I'm a teapot (RFC 2324)");
    }

    #[tokio::test]
    async fn non_teapot_4xx_statuses_end_in_the_unauthorized_outcome() {
        for status in [400, 401, 403, 499] {
            let outcome = run_scripted(ScriptedTransport::new().with_status(status, "")).await;

            assert_eq!(outcome, Outcome::Unauthorized, "status {status}");
            assert_eq!(outcome.line(), "Response: 401 Unauthorized");
        }
    }

    #[tokio::test]
    async fn unclassified_statuses_print_the_error_message_verbatim() {
        let outcome = run_scripted(ScriptedTransport::new().with_status(301, "moved")).await;

        assert_eq!(
            outcome,
            Outcome::HttpFailure {
                message: "Response 301, moved".to_string()
            }
        );
        assert_eq!(outcome.line(), "Response 301, moved");
    }

    #[tokio::test]
    async fn transport_failure_ends_in_no_response() {
        let outcome =
            run_scripted(ScriptedTransport::new().with_failure("connection refused")).await;

        assert_eq!(outcome, Outcome::NoResponse);
        assert_eq!(outcome.line(), "No Response");
    }

    #[tokio::test]
    async fn every_terminal_branch_releases_the_resource() {
        for script in [
            ScriptedTransport::new().with_status(200, "OK"),
            ScriptedTransport::new().with_status(500, ""),
            ScriptedTransport::new().with_status(418, "I really am a teapot"),
            ScriptedTransport::new().with_status(301, ""),
            ScriptedTransport::new().with_failure("connection refused"),
        ] {
            let runner = Runner::new(test_config(), script);
            runner.run().await;

            assert_eq!(runner.lock().acquire_count(), 1);
            assert_eq!(runner.lock().release_count(), 1);
        }
    }

    #[tokio::test]
    async fn a_shared_lock_stays_balanced_across_runners() {
        let lock = Arc::new(ResourceLock::new());

        let first = Runner::with_lock(
            test_config(),
            ScriptedTransport::new().with_status(500, ""),
            Arc::clone(&lock),
        );
        let second = Runner::with_lock(
            test_config(),
            ScriptedTransport::new().with_status(200, "OK"),
            Arc::clone(&lock),
        );

        first.run().await;
        second.run().await;

        assert_eq!(lock.acquire_count(), 2);
        assert_eq!(lock.release_count(), 2);
        assert!(lock.is_balanced());
    }

    #[tokio::test]
    async fn outcome_names_are_stable() {
        let success = Outcome::Success {
            body: String::new(),
        };
        assert_eq!(success.name(), "success");
        assert_eq!(Outcome::ServerError.name(), "server-error");
        assert_eq!(Outcome::Teapot.name(), "teapot");
        assert_eq!(Outcome::Unauthorized.name(), "unauthorized");
        assert_eq!(Outcome::NoResponse.name(), "no-response");
    }
}
