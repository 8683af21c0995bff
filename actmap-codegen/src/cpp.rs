//! C++ lookup function generator
//!
//! Emits the firmware-side `map_action` as a header fragment:
//!
//! ```text
//! static int32_t map_action(uint32_t addr, uint8_t button)
//! {
//!   switch (addr) {
//!     case 0xaabbccdd:
//!       switch (button) {
//!         case 3: return 16777316;
//!         default: return 0;
//!       }
//!     default: return 0;
//!   }
//! }
//! ```
//!
//! The including translation unit provides `<stdint.h>`.

use crate::store::MappingStore;

const HEADER: &str = "\
// @generated by actmap, do not edit manually.\n\
// Regenerate: `actmap generate`\n\n";

/// Generate the C++ `map_action` function from a populated store.
pub fn generate_cpp(store: &MappingStore) -> String {
    let mut out = String::from(HEADER);

    out.push_str("static int32_t map_action(uint32_t addr, uint8_t button)\n{\n");
    out.push_str("  switch (addr) {\n");
    for (address, bindings) in store.entries() {
        out.push_str(&format!("    case {address:#x}:\n"));
        out.push_str("      switch (button) {\n");
        for binding in bindings {
            out.push_str(&format!(
                "        case {}: return {};\n",
                binding.button,
                int32_literal(binding.encoded())
            ));
        }
        out.push_str("        default: return 0;\n");
        out.push_str("      }\n");
    }
    out.push_str("    default: return 0;\n");
    out.push_str("  }\n}\n");

    out
}

/// `-2147483648` is unary minus applied to an out-of-range literal in C++.
fn int32_literal(value: i32) -> String {
    if value == i32::MIN {
        "INT32_MIN".to_string()
    } else {
        value.to_string()
    }
}
