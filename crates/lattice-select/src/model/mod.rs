//! Option data: declarations, the registry, and filtered views.

mod filter;
mod option;
mod registry;

pub use filter::{FilterEngine, FilterMethod, FilteredEntry, FilteredView};
pub use option::{OptionDecl, SelectOption};
pub use registry::OptionRegistry;
