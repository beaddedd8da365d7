//! # fxlint-rules
//!
//! Built-in convention rules for fxlint.
//!
//! Each rule family inspects parsed Go declarations for one convention of
//! fx-organized codebases.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FX001 | `module-location` | Restricts module constructor calls to designated module files and directories |
//! | FX002 | `module-naming` | Requires module names to match their owning package or directory |
//! | FX003 | `mock-placement` | Restricts mock type declarations to the designated mocks directory |
//!
//! ## Usage
//!
//! ```ignore
//! use fxlint_core::{check_file, Config};
//! use fxlint_rules::enabled_rules;
//!
//! let config = Config::default();
//! let rules = enabled_rules(&config);
//! let violations = check_file(&parsed, &rules);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mock_placement;
mod module_call;
mod module_location;
mod module_naming;
mod presets;

pub use mock_placement::MockPlacement;
pub use module_location::ModuleLocation;
pub use module_naming::ModuleNaming;
pub use presets::{all_rules, enabled_rules};

/// Re-export core types for convenience.
pub use fxlint_core::{Rule, Severity, Violation};
