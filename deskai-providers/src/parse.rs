use anyhow::{Context, anyhow};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Extracts the generated text from a generateContent response.
///
/// The first candidate's parts are concatenated as-is; the caller displays
/// the result verbatim, so no cleanup happens here.
pub fn parse_generate_content(body: &[u8]) -> anyhow::Result<String> {
    let resp: GenerateContentResponse =
        serde_json::from_slice(body).context("decode generateContent JSON")?;

    let Some(candidate) = resp.candidates.into_iter().next() else {
        if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(anyhow!("prompt was blocked by the provider: {reason}"));
        }
        return Err(anyhow!("no candidates in generateContent response"));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        return Err(anyhow!("candidate carried no text parts"));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_part_candidate() {
        let body = br#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        assert_eq!(parse_generate_content(body).unwrap(), "hello");
    }

    #[test]
    fn concatenates_multiple_parts() {
        let body =
            br#"{"candidates":[{"content":{"parts":[{"text":"foo "},{"text":"bar"}]}}]}"#;
        assert_eq!(parse_generate_content(body).unwrap(), "foo bar");
    }

    #[test]
    fn blocked_prompt_reports_the_reason() {
        let body = br#"{"candidates":[],"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = parse_generate_content(body).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn empty_candidate_errors() {
        let body = br#"{"candidates":[{"content":{"parts":[]}}]}"#;
        assert!(parse_generate_content(body).is_err());
    }
}
