//! Media storage for generated clips and assembled videos.
//!
//! Layout under the media root:
//!
//! ```text
//! media/
//! ├── clips/
//! │   ├── <job_id>_scene_0.mp4
//! │   └── <job_id>_scene_1.mp4
//! └── final/
//!     └── <job_id>_final.mp4
//! ```
//!
//! Filenames are keyed by `(job_id, scene index)`, so concurrent scene
//! workers never write to the same file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clip_store;

pub use clip_store::ClipStore;
