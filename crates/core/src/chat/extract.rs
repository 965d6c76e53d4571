use super::types::ChatResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("Could not parse the AI response. Raw response: {raw}")]
    Unparseable { raw: String },
}

/// Extract `choices[0].message.content` from a raw response body.
///
/// Any deviation from the expected shape, including an empty `choices`
/// list, yields an error that carries the raw body.
pub fn extract_content(body: &str) -> Result<String, ResponseError> {
    let unparseable = || ResponseError::Unparseable {
        raw: body.to_string(),
    };

    let response: ChatResponse = serde_json::from_str(body).map_err(|_| unparseable())?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(unparseable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_is_returned() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "DOC"}},
                {"index": 1, "message": {"role": "assistant", "content": "OTHER"}}
            ],
            "usage": {"total_tokens": 12}
        }"#;

        assert_eq!(extract_content(body).unwrap(), "DOC");
    }

    #[test]
    fn test_missing_choices_includes_raw_body() {
        let body = r#"{"error": "quota exceeded"}"#;
        let err = extract_content(body).unwrap_err();

        assert!(err.to_string().contains(body));
        assert!(err
            .to_string()
            .starts_with("Could not parse the AI response."));
    }

    #[test]
    fn test_empty_choices() {
        let body = r#"{"choices": []}"#;
        assert_eq!(
            extract_content(body).unwrap_err(),
            ResponseError::Unparseable {
                raw: body.to_string()
            }
        );
    }

    #[test]
    fn test_missing_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        assert!(extract_content(body).is_err());
    }

    #[test]
    fn test_not_json() {
        let body = "<html>Bad Gateway</html>";
        let err = extract_content(body).unwrap_err();
        assert!(err.to_string().contains("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_markdown_content_is_untouched() {
        let body = serde_json::json!({
            "choices": [{"message": {"content": "## Usage\n\n```python\nf()\n```"}}]
        })
        .to_string();
        assert_eq!(
            extract_content(&body).unwrap(),
            "## Usage\n\n```python\nf()\n```"
        );
    }
}
