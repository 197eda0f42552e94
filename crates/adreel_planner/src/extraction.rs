//! Utilities for extracting JSON from language model replies.
//!
//! Replies often wrap JSON in markdown code fences or surround it with
//! prose. Extraction tries, in order:
//! 1. The contents of the first fenced block (optionally tagged `json`)
//! 2. The span from the first `{` to the last `}`
//! 3. The trimmed reply as-is

use adreel_error::{AdreelResult, JsonError};
use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").expect("Valid fence regex"));

/// Extract the JSON candidate from a reply.
///
/// Never fails; when no structure is found the trimmed reply is returned and
/// decoding reports the problem.
///
/// # Examples
///
/// ```
/// use adreel_planner::extract_json_block;
///
/// let fenced = "Here you go:\n```json\n{\"shots\": []}\n```\nEnjoy!";
/// assert_eq!(extract_json_block(fenced), "{\"shots\": []}");
///
/// let prose = "Sure! {\"shots\": []} Let me know.";
/// assert_eq!(extract_json_block(prose), "{\"shots\": []}");
/// ```
pub fn extract_json_block(response: &str) -> &str {
    if let Some(inner) = FENCED_BLOCK.captures(response).and_then(|c| c.get(1)) {
        return inner.as_str().trim();
    }

    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}'))
        && end > start
    {
        return &response[start..=end];
    }

    response.trim()
}

/// Parse JSON into `T`.
///
/// # Errors
///
/// Returns a [`JsonError`] with a preview of the input if decoding fails.
///
/// # Examples
///
/// ```
/// use adreel_core::Storyboard;
/// use adreel_planner::parse_json;
///
/// let board: Storyboard = parse_json(r#"{"shots": [{"type": "Close-up"}]}"#).unwrap();
/// assert_eq!(board.len(), 1);
/// ```
pub fn parse_json<T>(json_str: &str) -> AdreelResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(200).collect::<String>();

        tracing::debug!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        JsonError::unparseable(e, json_str).into()
    })
}
