use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::WorkerError;

/// Name of the single registered task handler. Synthesized envelopes are
/// always addressed to it.
pub const PUSH_TASK: &str = "push";

/// Wire-level task invocation: what the consumer expects around a job's
/// arguments. Fields beyond the core four are preserved verbatim so a
/// pre-formed envelope round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEnvelope {
    pub task: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub args: Vec<Value>,

    #[serde(default)]
    pub kwargs: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The two shapes a producer may publish, discriminated by presence of the
/// `task` field. Producers outside the task-queue ecosystem can publish a
/// plain job document and have it wrapped on the way in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InboundMessage {
    Envelope(TaskEnvelope),
    Raw(Value),
}

impl InboundMessage {
    pub fn decode(payload: &[u8]) -> Result<Self, WorkerError> {
        serde_json::from_slice(payload).map_err(WorkerError::from)
    }

    /// Resolves the message into an executable invocation. Pre-formed
    /// envelopes pass through untouched; raw payloads are wrapped as the sole
    /// positional argument of the push task and assigned a fresh id so the
    /// job stays traceable through the queue.
    pub fn into_invocation(self) -> TaskEnvelope {
        match self {
            Self::Envelope(envelope) => envelope,
            Self::Raw(payload) => TaskEnvelope {
                task: PUSH_TASK.to_string(),
                id: Some(Uuid::new_v4().to_string()),
                args: vec![payload],
                kwargs: Map::new(),
                extra: Map::new(),
            },
        }
    }
}
