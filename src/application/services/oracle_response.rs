use serde_json::Value;

use crate::application::ports::GenerationBackend;
use crate::domain::{OracleOutput, Topic};
use crate::infrastructure::observability::sanitize_prompt;

/// Calls the oracle and recovers whatever it can. Never fails: every backend
/// error collapses to `OracleOutput::Empty`.
#[tracing::instrument(skip_all, fields(backend = backend.name()))]
pub async fn query_oracle(backend: &dyn GenerationBackend, prompt: &str) -> OracleOutput {
    tracing::debug!(prompt = %sanitize_prompt(prompt), "Querying generation oracle");

    match backend.generate(prompt).await {
        Ok(text) => {
            let output = parse_oracle_text(&text);
            tracing::info!(
                kind = output.kind(),
                response = %sanitize_prompt(&text),
                "Oracle responded"
            );
            output
        }
        Err(e) => {
            tracing::warn!(error = %e, "Oracle unusable, falling back to heuristics");
            OracleOutput::Empty
        }
    }
}

/// Looks for a topic array between the first `[` and the last `]`, so prose
/// around the payload is tolerated.
pub fn parse_oracle_text(text: &str) -> OracleOutput {
    if text.trim().is_empty() {
        return OracleOutput::Empty;
    }

    let bounds = text.find('[').zip(text.rfind(']'));
    if let Some((start, end)) = bounds.filter(|(start, end)| start < end) {
        match serde_json::from_str::<Vec<Value>>(&text[start..=end]) {
            Ok(items) => {
                let total = items.len();
                let topics: Vec<Topic> = items.iter().filter_map(topic_from_value).collect();
                if topics.len() < total {
                    tracing::debug!(
                        dropped = total - topics.len(),
                        "Skipped oracle items without a string topic"
                    );
                }
                return OracleOutput::Structured(topics);
            }
            Err(e) => tracing::debug!(error = %e, "Oracle text held no JSON array"),
        }
    }

    OracleOutput::Unstructured(text.to_string())
}

/// One oracle item. A non-string `topic` drops the item; null or malformed
/// `subtopics` count as none, and non-string entries inside them are skipped.
fn topic_from_value(item: &Value) -> Option<Topic> {
    let topic = item.get("topic")?.as_str()?;
    let subtopics = item
        .get("subtopics")
        .or_else(|| item.get("sub_topics"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Topic::new(topic, subtopics))
}
