//! The canned storyboard used whenever planning cannot produce one.

use adreel_core::{OnScreenText, Shot, Storyboard};

/// Two generic studio shots, truncated to `max_scenes`.
///
/// Never padded: asking for more than two scenes still yields two shots.
///
/// # Examples
///
/// ```
/// use adreel_planner::fallback_storyboard;
///
/// assert_eq!(fallback_storyboard(4).len(), 2);
/// assert_eq!(fallback_storyboard(1).len(), 1);
/// ```
pub fn fallback_storyboard(max_scenes: usize) -> Storyboard {
    Storyboard::new(vec![
        Shot::new("Wide shot")
            .with_duration(5)
            .with_camera("Static")
            .with_context("Professional studio lighting")
            .with_focus("Product centerpiece")
            .with_text(OnScreenText::caption("Experience perfection.")),
        Shot::new("Close-up")
            .with_duration(5)
            .with_camera("Slow pan")
            .with_context("Detailed texture view")
            .with_focus("Intricate details")
            .with_text(OnScreenText::caption("Crafted with care.")),
    ])
    .truncated(max_scenes)
}
