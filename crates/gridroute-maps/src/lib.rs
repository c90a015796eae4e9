//! Map sources for gridroute: text layouts, seeded generation, and the
//! built-in presets.

pub mod layout;
pub mod mapgen;
pub mod presets;

pub use layout::{Layout, LayoutError};
pub use mapgen::MapGen;
pub use presets::{ParsePresetError, Preset};
