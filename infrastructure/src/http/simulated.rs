//! Stand-in submitter for forms that have no endpoint yet.

use async_trait::async_trait;
use formgate_application::{FormSubmitter, SubmitError};
use formgate_domain::FormPayload;
use std::time::Duration;
use tracing::debug;

/// Accepts every submission after a fixed delay.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        debug!(
            "Simulating {} submission ({:?} delay)",
            payload.form(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
