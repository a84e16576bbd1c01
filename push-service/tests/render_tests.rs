use std::collections::HashMap;

use push_service::render::render_template;
use serde_json::{Value, json};

fn context_with(key: &str, value: Value) -> HashMap<String, Value> {
    HashMap::from([(key.to_string(), value)])
}

/// Test: Rendering the same template with the same context twice is identical
#[test]
fn rendering_is_idempotent() {
    let context = context_with("name", json!("Alice"));

    let first = render_template("Hello {{name}}, welcome!", &context);
    let second = render_template("Hello {{name}}, welcome!", &context);

    assert_eq!(first, second);
}

#[test]
fn substitutes_name_into_body() {
    let context = context_with("name", json!("Alice"));

    let rendered = render_template("Hello {{name}}, welcome!", &context);

    assert_eq!(rendered, "Hello Alice, welcome!");
}

/// Test: Placeholders with no matching context key stay literal. This is the
/// documented behavior for jobs arriving without a `name`.
#[test]
fn unmatched_placeholders_are_left_literal() {
    let rendered = render_template("Hello {{name}}, welcome!", &HashMap::new());

    assert_eq!(rendered, "Hello {{name}}, welcome!");
}

#[test]
fn substitutes_scalar_context_values() {
    let mut context = HashMap::new();
    context.insert("count".to_string(), json!(3));
    context.insert("active".to_string(), json!(true));
    context.insert("note".to_string(), Value::Null);

    let rendered = render_template("{{count}} {{active}} [{{note}}]", &context);

    assert_eq!(rendered, "3 true []");
}
