//! actmap codegen: button mapping files to firmware lookup functions
//!
//! This library reads a line-oriented mapping file that assigns action codes
//! to `(device address, button)` pairs and emits a pure lookup function,
//! `map_action(address, button)`, for firmware that cannot afford to parse the
//! file at runtime:
//!
//! - **Parsing**: [`ConfigParser`] validates each line, tracks `group`
//!   directives and expands wildcard buttons
//! - **Storage**: [`MappingStore`] keeps first-seen order for emission and
//!   the last-written value for each pair
//! - **Emission**: [`generate_cpp`] (nested `switch`) and [`generate_rust`]
//!   (nested `match`), both byte-for-byte deterministic
//!
//! # Usage
//!
//! ```rust
//! use actmap_codegen::{generate, parse_config, Address, OutputTarget};
//!
//! let conf = "\
//! group 1
//! AA:BB:CC:DD 3 100
//! 01:02:03:04 -1 10
//! ";
//!
//! let store = parse_config(conf).unwrap();
//! assert_eq!(store.lookup(Address::new(0xAABBCCDD), 3), 100 | 0x0100_0000);
//! assert_eq!(store.lookup(Address::new(0x01020304), 2), 12 | 0x0100_0000);
//! assert_eq!(store.lookup(Address::new(0x01020304), 0), 0);
//!
//! let cpp = generate(&store, OutputTarget::Cpp);
//! assert!(cpp.contains("case 0xaabbccdd:"));
//! ```

pub mod address;
pub mod cpp;
pub mod error;
pub mod parser;
pub mod rust;
pub mod store;
pub mod target;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use address::{Address, AddressParseError};
pub use cpp::generate_cpp;
pub use error::{ConfigError, ConfigResult};
pub use parser::{parse_config, ConfigParser};
pub use rust::generate_rust;
pub use store::{Binding, MappingStore};
pub use target::{generate, OutputTarget};
