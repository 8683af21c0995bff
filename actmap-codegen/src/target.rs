//! Output language selection

use crate::cpp::generate_cpp;
use crate::rust::generate_rust;
use crate::store::MappingStore;

/// Language of the generated lookup function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// C++ header fragment for the original firmware.
    #[default]
    Cpp,
    /// Rust `const fn`.
    Rust,
}

impl OutputTarget {
    /// Conventional file extension for the artefact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Cpp => "hpp",
            Self::Rust => "rs",
        }
    }
}

/// Generate `map_action` for the chosen target.
pub fn generate(store: &MappingStore, target: OutputTarget) -> String {
    match target {
        OutputTarget::Cpp => generate_cpp(store),
        OutputTarget::Rust => generate_rust(store),
    }
}
