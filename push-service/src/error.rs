use thiserror::Error;

/// Failure kinds a push job can hit on its way through the worker.
///
/// `Parse` and `Lookup` propagate out of the handler so the consume loop can
/// reject the message; `Delivery` is captured inside the delivery client and
/// surfaces only as a `DeliveryOutcome` with `success: false`.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("malformed push message: {0}")]
    Parse(String),

    #[error("{resource} lookup failed: {reason}")]
    Lookup {
        resource: &'static str,
        reason: String,
    },

    #[error("push delivery failed: {0}")]
    Delivery(String),
}

impl From<serde_json::Error> for WorkerError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
