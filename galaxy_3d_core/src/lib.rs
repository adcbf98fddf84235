/*!
# Galaxy 3D Core

Low-level primitives shared by the Galaxy3D renderer and its Vulkan backend.

## Contents

- **check**: fatal checks that stop the process with call-site context,
  the `pedantic!` debug-only predicate and the `unreachable_path!` marker
- **utils::IndexPool**: fixed-capacity ring of free `u32` indices for
  descriptor slots, frames in flight and other small handles
- **utils::SlotTable**: per-slot storage addressed by pool indices
- **log**: pluggable logger used for core diagnostics

Pedantic checks are compiled into debug builds, and into release builds when
the `strict-checks` feature is enabled.
*/

// Internal modules
mod error;
pub mod check;
pub mod log;
pub mod utils;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Galaxy3dError as Error, Galaxy3dResult as Result};

    // Fatal check entry points (macros live at the crate root)
    pub mod check {
        pub use crate::check::{check, check_failed, PEDANTIC_ENABLED};
    }

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }

    // Handle allocation sub-module
    pub mod utils {
        pub use crate::utils::*;
    }
}
