//! Board core: queen placements and conflict rules

pub mod placement;
pub mod rules;
pub mod io;

pub use placement::{Placement, UNPLACED};
pub use rules::ConflictRules;
pub use io::{load_placement_from_file, save_placement_to_file, create_example_placements};
