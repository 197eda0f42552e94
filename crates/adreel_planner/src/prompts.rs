//! Message builders for the three planning rounds.

use adreel_core::ChatMessage;

/// Messages for the draft round.
///
/// The system instruction pins the shot count and the `shots` JSON shape.
pub fn draft_messages(product_description: &str, max_scenes: usize) -> Vec<ChatMessage> {
    let system = format!(
        "You are a senior creative director for e-commerce video ads. \
         You MUST produce a JSON storyboard for a 6-10 second video ad with exactly {max_scenes} shots. \
         Only return valid JSON with a top-level 'shots' array. No comments, no explanations."
    );
    let user = format!(
        "Product details:\n{product_description}\n\n\
         Generate a high-conversion video ad storyboard. \
         Each shot must have: type, duration (seconds), camera, context, focus, \
         and optional caption or overlay for CTA. Reply with JSON only."
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Messages for the critique round.
///
/// Asks for a short critique along pacing, camera variety and CTA clarity.
pub fn critique_messages(product_description: &str, draft: &str) -> Vec<ChatMessage> {
    let system = "You are a critical film editor. Analyze the given video storyboard draft. \
                  Identify 3 key areas to improve for better flow, engagement, and visual impact. \
                  Focus on: 1) Pacing, 2) Visual variety (camera angles), 3) Clarity of the CTA. \
                  Be concise.";
    let user = format!(
        "Product: {product_description}\n\nDraft Storyboard:\n{draft}\n\nProvide a short critique."
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Messages for the refine round.
pub fn refine_messages(draft: &str, critique: &str, max_scenes: usize) -> Vec<ChatMessage> {
    let system = format!(
        "You are a master storyboard artist. \
         Rewrite the storyboard to address the critique, producing the FINAL version with exactly {max_scenes} shots. \
         Return ONLY valid JSON. No markdown formatting, no comments."
    );
    let user = format!(
        "Original Draft:\n{draft}\n\nCritique to Address:\n{critique}\n\n\
         Generate the polished, final JSON storyboard."
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}
