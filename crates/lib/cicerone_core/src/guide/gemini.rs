//! Google Gemini text-generation provider.
//!
//! Calls the Gemini `generateContent` REST API. There is no retry loop: a
//! failed or timed-out call is surfaced to the caller as
//! [`GuideError::Remote`] and retrying is the caller's decision.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatTurn, GuideConfig, GuideError, Role};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Map a chat role to the Gemini wire role.
fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

fn build_request<'a>(
    system: Option<&'a str>,
    turns: &'a [ChatTurn],
    temperature: f32,
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: turns
            .iter()
            .map(|t| Content {
                role: Some(wire_role(t.role)),
                parts: vec![Part { text: &t.content }],
            })
            .collect(),
        system_instruction: system.map(|text| Content {
            role: None,
            parts: vec![Part { text }],
        }),
        generation_config: GenerationConfig { temperature },
    }
}

/// Send a conversation to Gemini and return the first candidate's text.
pub async fn complete(
    config: &GuideConfig,
    system: Option<&str>,
    turns: &[ChatTurn],
    temperature: f32,
) -> Result<String, GuideError> {
    let api_key = config.gemini_api_key.as_deref().ok_or_else(|| {
        GuideError::Config("GEMINI_API_KEY is required for gemini provider".to_string())
    })?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| GuideError::Remote(format!("HTTP client build failed: {e}")))?;

    let url = format!("{GEMINI_API_BASE}/models/{}:generateContent", config.model);
    let request = build_request(system, turns, temperature);

    let resp = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| GuideError::Remote(format!("Gemini request failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        return Err(GuideError::Remote(format!(
            "Gemini generation failed: {status} {body}"
        )));
    }

    let data: GenerateContentResponse = resp
        .json()
        .await
        .map_err(|e| GuideError::Remote(format!("Gemini response parse error: {e}")))?;

    let text: String = data
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GuideError::Remote("Gemini returned no candidates".to_string()))?
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();

    if text.is_empty() {
        return Err(GuideError::Remote(
            "Gemini returned an empty candidate".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: Role, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn assistant_maps_to_model_role() {
        assert_eq!(wire_role(Role::User), "user");
        assert_eq!(wire_role(Role::Assistant), "model");
    }

    #[test]
    fn request_body_shape() {
        let turns = [
            turn(Role::User, "hi"),
            turn(Role::Assistant, "hello"),
        ];
        let request = build_request(Some("persona"), &turns, 0.5);
        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "persona");
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn system_instruction_omitted_when_absent() {
        let turns = [turn(Role::User, "hi")];
        let request = build_request(None, &turns, 0.8);
        let json = serde_json::to_value(&request).expect("serialize");

        assert!(json.get("systemInstruction").is_none());
        assert!(json["contents"][0].get("role").is_some());
    }

    #[test]
    fn response_parses_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Bonjour"}, {"text": "!"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Bonjour!");
    }

    #[test]
    fn response_tolerates_missing_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.candidates.is_empty());
    }
}
