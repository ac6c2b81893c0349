use serde_json::Value;

type Accessor = fn(&Value) -> Option<String>;

fn plain_string(json: &Value) -> Option<String> {
    json.as_str().map(str::to_string)
}

fn top_level_text(json: &Value) -> Option<String> {
    json.get("text")?.as_str().map(str::to_string)
}

fn nested_response_text(json: &Value) -> Option<String> {
    json.get("response")?.get("text")?.as_str().map(str::to_string)
}

fn candidate_parts(json: &Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}

/// Layouts seen from the reading server, tried in order
const ACCESSORS: &[Accessor] = &[
    plain_string,
    top_level_text,
    nested_response_text,
    candidate_parts,
];

/// Pull the generated prose out of a backend response
pub fn extract_text(json: &Value) -> Option<String> {
    ACCESSORS
        .iter()
        .filter_map(|accessor| accessor(json))
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_top_level_text() {
        assert_eq!(
            extract_text(&json!({"text": " 발음: [klɑːk] "})).as_deref(),
            Some("발음: [klɑːk]")
        );
    }

    #[test]
    fn reads_nested_response_text() {
        let json = json!({"response": {"text": "뜻: 시계"}});
        assert_eq!(extract_text(&json).as_deref(), Some("뜻: 시계"));
    }

    #[test]
    fn joins_candidate_parts() {
        let json = json!({
            "candidates": [{
                "content": {"parts": [{"text": "발음: x\n"}, {"text": "뜻: y"}]}
            }]
        });
        assert_eq!(extract_text(&json).as_deref(), Some("발음: x\n뜻: y"));
    }

    #[test]
    fn accepts_bare_json_string() {
        assert_eq!(extract_text(&json!("예문: hi")).as_deref(), Some("예문: hi"));
    }

    #[test]
    fn blank_or_missing_text_is_none() {
        assert_eq!(extract_text(&json!({"text": "   "})), None);
        assert_eq!(extract_text(&json!({"error": "quota"})), None);
        assert_eq!(extract_text(&json!({"candidates": []})), None);
    }

    #[test]
    fn blank_text_falls_through_to_next_layout() {
        let json = json!({"text": "", "response": {"text": "뜻: 시계"}});
        assert_eq!(extract_text(&json).as_deref(), Some("뜻: 시계"));
    }
}
