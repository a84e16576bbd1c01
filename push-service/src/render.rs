use std::collections::HashMap;

use serde_json::Value;

/// Substitutes `{{key}}` placeholders from the context into the template.
/// Placeholders with no matching context key are left as literal text, so the
/// same input always renders to the same output.
pub fn render_template(template: &str, context: &HashMap<String, Value>) -> String {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{{{}}}}}", key);

        let replacement = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        result = result.replace(&placeholder, &replacement);
    }

    result
}
