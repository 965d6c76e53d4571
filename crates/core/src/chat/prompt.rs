use super::types::{ChatMessage, ChatRequest};

/// Fixed instruction placed in front of every source file.
pub const INSTRUCTION: &str =
    "Generate professional markdown documentation for this Python code snippet:";

/// Build the user prompt for a source file.
pub fn build_prompt(content: &str) -> String {
    format!("{INSTRUCTION}\n\n{content}")
}

/// Build a chat-completion request carrying a single user message.
pub fn build_request(model: &str, content: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: build_prompt(content),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_appends_content_after_blank_line() {
        let prompt = build_prompt("print(1)");
        assert_eq!(
            prompt,
            "Generate professional markdown documentation for this Python code snippet:\n\nprint(1)"
        );
    }

    #[test]
    fn test_request_wire_shape() {
        let request = build_request("gpt-test", "x = 1");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-test",
                "messages": [
                    {"role": "user", "content": format!("{INSTRUCTION}\n\nx = 1")}
                ]
            })
        );
    }

    #[test]
    fn test_content_is_embedded_verbatim() {
        let source = "def f():\n    return \"\\n{}\"\n";
        let request = build_request("m", source);

        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0].content.ends_with(source));
    }
}
