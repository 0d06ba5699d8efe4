/// Client for the Wolfram|Alpha v2 query API.
///
/// Submits expressions, retrieves and decodes responses, and extracts the
/// answer text. Every call builds its own request and decodes its own
/// response; the client holds no mutable state and is safe to share across
/// concurrent tasks. Cloning is cheap.
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::WolframError;
use crate::model::QueryResult;
use crate::parser;
use crate::solution;
use crate::transport::{HttpTransport, Transport};

/// Base URL of the v2 query endpoint.
const BASE_URL: &str = "http://api.wolframalpha.com/v2/query";

/// Outcome of an asynchronously dispatched solve.
///
/// Echoes the original expression so callers can correlate completions,
/// which may arrive in any order across concurrent calls.
#[derive(Debug)]
pub struct SolveOutcome {
    pub expression: String,
    pub result: Result<String, WolframError>,
}

#[derive(Clone)]
pub struct WolframClient<T = HttpTransport> {
    app_id: String,
    transport: T,
}

impl WolframClient<HttpTransport> {
    /// Create a client over the default HTTP transport.
    ///
    /// `app_id` is the application ID issued by Wolfram; one is required per
    /// application.
    pub fn new(app_id: impl Into<String>) -> Result<Self, WolframError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(app_id, transport))
    }
}

impl<T: Transport> WolframClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(app_id: impl Into<String>, transport: T) -> Self {
        Self {
            app_id: app_id.into(),
            transport,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Submit `expression` and return the raw response body.
    ///
    /// `=` characters are padded with surrounding spaces before
    /// percent-encoding, matching how the service tokenizes equations.
    pub async fn submit(&self, expression: &str) -> Result<String, WolframError> {
        let url = self.request_url(expression)?;
        debug!(expression, "submitting expression");
        let body = self.transport.fetch(&url).await?;
        Ok(body)
    }

    /// Submit `expression` and decode the response into a [`QueryResult`].
    pub async fn get_result(&self, expression: &str) -> Result<QueryResult, WolframError> {
        let response = self.submit(expression).await?;
        parser::parse_query_result(&response)
    }

    /// Submit `expression` and extract the answer text from the response.
    ///
    /// "No solution found" outcomes are ordinary `Ok` values; only transport
    /// and decoding problems surface as errors.
    pub async fn solve(&self, expression: &str) -> Result<String, WolframError> {
        let result = self.get_result(expression).await?;
        Ok(solution::extract_solution(&result))
    }

    /// Build the request URL for `expression`, rejecting an empty one before
    /// any transport work happens.
    fn request_url(&self, expression: &str) -> Result<String, WolframError> {
        if expression.is_empty() {
            return Err(WolframError::InvalidArgument(
                "expression must not be empty".to_string(),
            ));
        }

        let padded = expression.replace('=', " = ");
        let encoded: String = form_urlencoded::byte_serialize(padded.as_bytes()).collect();
        Ok(format!(
            "{BASE_URL}?appid={}&input={encoded}&format=image,plaintext",
            self.app_id
        ))
    }
}

impl<T> WolframClient<T>
where
    T: Transport + Clone + 'static,
{
    /// Solve on a freshly spawned task, returning a handle to the outcome.
    ///
    /// Scheduling convenience only: the spawned task runs the identical
    /// synchronous pipeline. Correlate concurrent completions by the echoed
    /// expression, not by completion order.
    pub fn spawn_solve(&self, expression: impl Into<String>) -> JoinHandle<SolveOutcome> {
        let client = self.clone();
        let expression = expression.into();
        tokio::spawn(async move {
            let result = client.solve(&expression).await;
            SolveOutcome { expression, result }
        })
    }

    /// Like [`Self::spawn_solve`], but delivers the outcome through `notify`
    /// instead of the join handle. Exactly one send fires per call.
    pub fn solve_notify(
        &self,
        expression: impl Into<String>,
        notify: mpsc::UnboundedSender<SolveOutcome>,
    ) {
        let client = self.clone();
        let expression = expression.into();
        tokio::spawn(async move {
            let result = client.solve(&expression).await;
            if notify.send(SolveOutcome { expression, result }).is_err() {
                warn!("solve outcome receiver dropped before delivery");
            }
        });
    }
}
