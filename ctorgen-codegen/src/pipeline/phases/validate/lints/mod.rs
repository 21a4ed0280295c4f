//! Built-in lints for manifest validation.

mod conflicting_markers;
mod no_marked_types;
mod unmarked_base;
mod unresolved_base;

pub use conflicting_markers::ConflictingMarkersLint;
pub use no_marked_types::NoMarkedTypesLint;
pub use unmarked_base::UnmarkedBaseLint;
pub use unresolved_base::UnresolvedBaseLint;
