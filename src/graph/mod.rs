pub mod builder;
pub mod tension;

pub use builder::{BuildStats, GraphBuilder, SocialGraph};
pub use tension::find_tension_pairs;
