//! Rust lookup function generator
//!
//! Emits `map_action` as a `const fn` with nested `match` expressions, for
//! firmware written in Rust. Uses [`quote`] for quasi-quoting token streams
//! and [`prettyplease`] for formatting the output into idiomatic Rust.

use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;

use crate::address::Address;
use crate::store::{Binding, MappingStore};

const HEADER: &str = "\
// @generated by actmap, do not edit manually.\n\
// Regenerate: `actmap generate --target rust`\n\n";

/// Generate a Rust source file containing `map_action`.
pub fn generate_rust(store: &MappingStore) -> String {
    let address_arms: Vec<TokenStream> = store
        .entries()
        .map(|(address, bindings)| emit_address_arm(address, bindings))
        .collect();

    let file_tokens = quote! {
        /// Map a device address and button index to an action code.
        ///
        /// Returns 0 when the address or the button has no mapping.
        #[allow(clippy::match_single_binding, clippy::unreadable_literal)]
        pub const fn map_action(address: u32, button: u8) -> i32 {
            match address {
                #(#address_arms)*
                _ => 0,
            }
        }
    };

    let syntax_tree = syn::parse2(file_tokens).expect("generated tokens should be valid Rust");
    let formatted = prettyplease::unparse(&syntax_tree);

    format!("{HEADER}{formatted}")
}

fn emit_address_arm<'a>(
    address: Address,
    bindings: impl Iterator<Item = &'a Binding>,
) -> TokenStream {
    let addr_lit = syn::LitInt::new(&format!("{address:#x}"), Span::call_site());
    let button_arms: Vec<TokenStream> = bindings.map(emit_button_arm).collect();

    quote! {
        #addr_lit => match button {
            #(#button_arms)*
            _ => 0,
        },
    }
}

fn emit_button_arm(binding: &Binding) -> TokenStream {
    let button = Literal::u8_unsuffixed(binding.button);
    let code = int32_tokens(binding.encoded());
    quote! { #button => #code, }
}

/// Negative codes are emitted as a negated literal, which also covers `i32::MIN`.
fn int32_tokens(value: i32) -> TokenStream {
    let magnitude = Literal::u32_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
