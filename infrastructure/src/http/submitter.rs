//! HTTP form submitter: one POST per submission.

use async_trait::async_trait;
use formgate_application::{FormSubmitter, SubmitError};
use formgate_domain::FormPayload;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const USER_AGENT_VALUE: &str = concat!("formgate/", env!("CARGO_PKG_VERSION"));

/// Error body returned by form backends such as Formspree:
/// `{"errors": [{"message": "..."}]}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Posts form payloads to a configured endpoint.
///
/// The body is `application/x-www-form-urlencoded` with every field, and
/// the request asks for `application/json`. A 2xx status is acceptance;
/// anything else is a rejection.
pub struct HttpFormSubmitter {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpFormSubmitter {
    /// Create a submitter with its own client bounded by `timeout`
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint, timeout))
    }

    /// Create a submitter around an existing client
    pub fn with_client(client: reqwest::Client, endpoint: Url, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error) -> SubmitError {
        if e.is_timeout() {
            SubmitError::Timeout(self.timeout)
        } else {
            SubmitError::Transport(e.to_string())
        }
    }
}

/// Best human-readable reason for a rejected submission
fn rejection_reason(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<ErrorBody>(body).ok().and_then(|parsed| {
        let messages: Vec<_> = parsed.errors.into_iter().map(|e| e.message).collect();
        if messages.is_empty() {
            parsed.error
        } else {
            Some(messages.join("; "))
        }
    });

    from_body.unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string())
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        debug!("POST {} ({} form)", self.endpoint, payload.form());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .form(payload.values())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            debug!("Endpoint answered {}", status.as_u16());
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            reason: rejection_reason(status, &body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgate_domain::{FormKind, FormSession, SubmitAttempt, names};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contact_payload() -> FormPayload {
        let mut session = FormSession::for_kind(FormKind::Contact);
        for (name, value) in [
            (names::FIRST_NAME, "Jo"),
            (names::LAST_NAME, "Lee"),
            (names::EMAIL, "jo@lee.dev"),
            (names::INQUIRY_TYPE, "hiring-partner"),
            (names::MESSAGE, "We are hiring two engineers."),
        ] {
            session.set_value(name, value).unwrap();
        }
        match session.begin_submit() {
            SubmitAttempt::Started(payload) => payload,
            other => panic!("expected Started, got {:?}", other),
        }
    }

    fn submitter_for(server: &MockServer, timeout: Duration) -> HttpFormSubmitter {
        let endpoint = Url::parse(&format!("{}/f/contact", server.uri())).unwrap();
        HttpFormSubmitter::new(endpoint, timeout).unwrap()
    }

    #[tokio::test]
    async fn test_accepted_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/contact"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("firstName=Jo"))
            .and(body_string_contains("inquiryType=hiring-partner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let submitter = submitter_for(&server, Duration::from_secs(5));
        assert_eq!(submitter.endpoint().path(), "/f/contact");
        assert_eq!(submitter.submit(&contact_payload()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_rejected_with_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{"field": "email", "message": "should be an email"}]
            })))
            .mount(&server)
            .await;

        let submitter = submitter_for(&server, Duration::from_secs(5));
        let err = submitter.submit(&contact_payload()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 422,
                reason: "should be an email".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_without_body_uses_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let submitter = submitter_for(&server, Duration::from_secs(5));
        let err = submitter.submit(&contact_payload()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 500,
                reason: "Internal Server Error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let submitter = submitter_for(&server, Duration::from_millis(100));
        let err = submitter.submit(&contact_payload()).await.unwrap_err();
        assert_eq!(err, SubmitError::Timeout(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Grab a free port and release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let endpoint = Url::parse(&format!("http://127.0.0.1:{}/f/contact", port)).unwrap();

        let submitter = HttpFormSubmitter::new(endpoint, Duration::from_secs(2)).unwrap();
        let err = submitter.submit(&contact_payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)), "got {:?}", err);
    }

    #[test]
    fn test_rejection_reason_fallbacks() {
        assert_eq!(
            rejection_reason(StatusCode::BAD_REQUEST, r#"{"error": "Form not found"}"#),
            "Form not found"
        );
        assert_eq!(
            rejection_reason(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "Bad Gateway"
        );
    }
}
