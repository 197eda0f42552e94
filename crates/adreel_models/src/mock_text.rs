//! Canned model replies used when the language model cannot be reached.

use adreel_core::{ChatMessage, Role};
use serde_json::json;

/// Placeholder answer for conversations that do not ask for a storyboard.
pub const MOCK_REPLY: &str =
    "This is a mock response from the local model because the model server is unreachable.";

/// Pick the canned reply for a conversation.
///
/// If any system message mentions "storyboard" (any case) the reply is a
/// four-shot storyboard JSON document, otherwise [`MOCK_REPLY`].
///
/// # Examples
///
/// ```
/// use adreel_core::ChatMessage;
/// use adreel_models::{MOCK_REPLY, mock_reply};
///
/// let plain = mock_reply(&[ChatMessage::system("You are a critical film editor.")]);
/// assert_eq!(plain, MOCK_REPLY);
///
/// let board = mock_reply(&[ChatMessage::system("Produce a JSON Storyboard.")]);
/// assert!(board.contains("\"shots\""));
/// ```
pub fn mock_reply(messages: &[ChatMessage]) -> String {
    let wants_storyboard = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .any(|m| m.content.to_lowercase().contains("storyboard"));

    if wants_storyboard {
        mock_storyboard()
    } else {
        MOCK_REPLY.to_string()
    }
}

fn mock_storyboard() -> String {
    json!({
        "shots": [
            {
                "type": "Wide shot",
                "duration": 5,
                "camera": "Static",
                "context": "A bright, clean studio setting",
                "focus": "The product in the center",
                "caption": "Introducing the new standard."
            },
            {
                "type": "Close-up",
                "duration": 5,
                "camera": "Slow zoom in",
                "context": "Detailed view of the product texture",
                "focus": "Product features",
                "caption": "Unmatched quality."
            },
            {
                "type": "Medium shot",
                "duration": 5,
                "camera": "Pan left",
                "context": "Lifestyle setting with soft lighting",
                "focus": "Product in use",
                "caption": "Designed for you."
            },
            {
                "type": "Wide shot",
                "duration": 5,
                "camera": "Static",
                "context": "Product with logo overlay",
                "focus": "Brand identity",
                "overlay": "Shop Now"
            }
        ]
    })
    .to_string()
}
