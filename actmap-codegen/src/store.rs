//! Mapping table
//!
//! [`MappingStore`] accumulates `(address, button) → (value, group)` entries
//! while a mapping file is parsed. It keeps two orders apart:
//!
//! - **iteration order** is fixed by the *first* time an address, and then a
//!   button within that address, is recorded;
//! - **stored value** is whatever the *last* `record` call for that pair set.
//!
//! Recording a pair again therefore updates it in place without moving it.

use indexmap::IndexMap;
use tracing::debug;

use crate::address::Address;

/// Multiplier placing the group number above the low 24 value bits.
pub const GROUP_SHIFT_FACTOR: i64 = 0x0100_0000;

/// One button's mapping within an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub button: u8,
    pub value: i64,
    pub group: i64,
}

impl Binding {
    /// The action code returned by the generated lookup function.
    ///
    /// Computes `value | (group * 0x1000000)` without range checks and keeps
    /// the low 32 bits, so a large group silently overwrites value bits.
    pub fn encoded(&self) -> i32 {
        (self.value | self.group.wrapping_mul(GROUP_SHIFT_FACTOR)) as i32
    }
}

/// Insertion-ordered table of address → button → [`Binding`].
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    table: IndexMap<Address, IndexMap<u8, Binding>>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping, overwriting any earlier one for the same pair.
    pub fn record(&mut self, address: Address, button: u8, value: i64, group: i64) {
        debug!(%address, button, value, group, "recorded mapping");
        self.table.entry(address).or_default().insert(
            button,
            Binding {
                button,
                value,
                group,
            },
        );
    }

    /// Every address with its bindings, both in first-seen order.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (Address, impl Iterator<Item = &Binding> + '_)> + '_ {
        self.table
            .iter()
            .map(|(address, buttons)| (*address, buttons.values()))
    }

    /// Reference semantics of the generated `map_action`.
    pub fn lookup(&self, address: Address, button: u8) -> i32 {
        self.table
            .get(&address)
            .and_then(|buttons| buttons.get(&button))
            .map(Binding::encoded)
            .unwrap_or(0)
    }

    pub fn address_count(&self) -> usize {
        self.table.len()
    }

    /// Total number of `(address, button)` pairs.
    pub fn mapping_count(&self) -> usize {
        self.table.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
