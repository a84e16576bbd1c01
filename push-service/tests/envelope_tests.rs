use push_service::error::WorkerError;
use push_service::models::envelope::{InboundMessage, PUSH_TASK};
use serde_json::json;

/// Test: Messages already carrying a `task` field pass through unchanged
#[test]
fn preformed_envelope_passes_through_unchanged() {
    let original = json!({
        "task": "push",
        "id": "7c3e9d52-55a4-4a8e-b3c0-1f2df0a1b9aa",
        "args": [{ "user_id": "u1", "name": "Alice" }],
        "kwargs": {},
        "retries": 0
    });

    let payload = serde_json::to_vec(&original).unwrap();
    let invocation = InboundMessage::decode(&payload).unwrap().into_invocation();

    assert_eq!(serde_json::to_value(&invocation).unwrap(), original);
}

/// Test: Raw payloads are wrapped as the sole positional argument of `push`
#[test]
fn raw_payload_is_wrapped_as_single_positional_argument() {
    let job = json!({ "user_id": "u1", "name": "Alice", "template_code": "TEMPLATE_001" });

    let invocation = InboundMessage::decode(job.to_string().as_bytes())
        .unwrap()
        .into_invocation();

    assert_eq!(invocation.task, PUSH_TASK);
    assert_eq!(invocation.args, vec![job]);
    assert!(invocation.kwargs.is_empty());
    assert!(invocation.id.is_some(), "synthesis should assign a task id");
}

/// Test: Each synthesized invocation gets its own id
#[test]
fn synthesized_invocations_get_distinct_ids() {
    let job = json!({ "user_id": "u1", "name": "Alice" });
    let payload = job.to_string();

    let first = InboundMessage::decode(payload.as_bytes())
        .unwrap()
        .into_invocation();
    let second = InboundMessage::decode(payload.as_bytes())
        .unwrap()
        .into_invocation();

    assert_ne!(first.id, second.id);
}

/// Test: Malformed JSON surfaces as a parse error
#[test]
fn malformed_json_is_a_parse_error() {
    let err = InboundMessage::decode(b"{ invalid json }").unwrap_err();

    assert!(matches!(err, WorkerError::Parse(_)));
}

/// Test: A pre-formed envelope without optional fields still resolves
#[test]
fn preformed_envelope_defaults_missing_args_and_kwargs() {
    let payload = json!({ "task": "push" }).to_string();

    let invocation = InboundMessage::decode(payload.as_bytes())
        .unwrap()
        .into_invocation();

    assert_eq!(invocation.task, PUSH_TASK);
    assert!(invocation.id.is_none(), "consumer must not invent an id for a pre-formed envelope");
    assert!(invocation.args.is_empty());
    assert!(invocation.kwargs.is_empty());
}
