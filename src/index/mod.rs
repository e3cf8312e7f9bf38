//! Lookup structures consulted during resolution: the build index, the
//! override table and filesystem probes. All are read-only while resolving.

mod build_index;
mod overrides;
mod probe;

pub use build_index::{BuildIndex, ImportIndex, IndexMatch, import_specs, is_barrel_file};
pub use overrides::OverrideTable;
pub use probe::{DiskProbe, FileProbe};
