//! Tutorials: static video and article content plus the tab filter.

mod filter;
mod tutorial;

pub use filter::TutorialFilter;
pub use tutorial::{tutorials, Difficulty, Tutorial, TutorialKind};
