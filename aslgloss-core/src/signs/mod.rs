//! Sign collaborators
//!
//! Turns gloss tokens into an ordered list of sign clips and hands that list
//! to a stitcher. Nothing here is needed for text conversion.

pub mod lookup;
pub mod plan;
pub mod stitch;

pub use lookup::{SignLookup, WlaslIndex};
pub use plan::{lookup_key, PlannedClip, SignPlan, SignPlanner};
pub use stitch::{ConcatManifest, StitchOptions, VideoStitcher};
