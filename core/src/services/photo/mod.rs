//! Photo pipeline module
//!
//! Uploaded photos go through three stages: a write to the private area,
//! a cover crop by the external image transformer, and a move into the
//! public area. Undo steps are recorded on a compensation stack as each
//! stage succeeds and replayed in reverse when a later stage fails.

mod compensation;
mod config;
mod fake;
mod pipeline;
mod traits;
mod types;


pub use compensation::{Compensation, CompensationStack};
pub use config::PhotoPipelineConfig;
pub use fake::FakeImageTransformer;
pub use pipeline::PhotoPipeline;
pub use traits::ImageTransformer;
pub use types::{StoredPhoto, UploadedPhoto};
