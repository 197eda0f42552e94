//! Storyboard planning for adreel.
//!
//! [`StoryboardPlanner`] asks a language model for a draft storyboard, a
//! critique of that draft and a refined rewrite, then decodes the rewrite.
//! Any failure along the way yields [`fallback_storyboard`] instead, so
//! planning always produces a storyboard.
//!
//! [`extract_json_block`] and [`parse_json`] recover JSON from replies that
//! wrap it in markdown fences or prose.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod fallback;
mod planner;
mod prompts;

pub use extraction::{extract_json_block, parse_json};
pub use fallback::fallback_storyboard;
pub use planner::{FallbackReason, PlanOutcome, StoryboardPlanner, StoryboardSource};
pub use prompts::{critique_messages, draft_messages, refine_messages};
