//! Device addresses
//!
//! An address is a 32-bit hardware identifier written in mapping files as
//! four colon-separated hex byte pairs, most significant byte first:
//! `AA:BB:CC:DD` decodes to `0xAABBCCDD`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-fA-F]{2}):([0-9a-fA-F]{2}):([0-9a-fA-F]{2}):([0-9a-fA-F]{2})$")
        .expect("address pattern is a valid regex")
});

/// Returned when a token is not of the form `##:##:##:##`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address `{0}`, expected ##:##:##:## where # is a hex digit")]
pub struct AddressParseError(pub String);

/// A 32-bit device address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(u32);

impl Address {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// The four address bytes, most significant first.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ADDRESS_RE
            .captures(s)
            .ok_or_else(|| AddressParseError(s.to_string()))?;

        let mut bytes = [0u8; 4];
        for (slot, group) in bytes.iter_mut().zip(caps.iter().skip(1)) {
            let digits = group.map(|m| m.as_str()).unwrap_or_default();
            *slot =
                u8::from_str_radix(digits, 16).map_err(|_| AddressParseError(s.to_string()))?;
        }
        Ok(Self::from_bytes(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_bytes();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}")
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u32> for Address {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_most_significant_byte_first() {
        let addr: Address = "AA:BB:CC:DD".parse().unwrap();
        assert_eq!(addr.raw(), 0xAABB_CCDD);
        assert_eq!(addr.to_bytes(), [0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn accepts_mixed_case() {
        let upper: Address = "0A:FF:10:E3".parse().unwrap();
        let lower: Address = "0a:ff:10:e3".parse().unwrap();
        let mixed: Address = "0a:Ff:10:E3".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn renders_back_to_the_same_bytes() {
        for text in ["00:00:00:00", "FF:FF:FF:FF", "01:23:45:67", "fe:dc:ba:98"] {
            let addr: Address = text.parse().unwrap();
            let rendered = addr.to_string();
            let again: Address = rendered.parse().unwrap();
            assert_eq!(again.to_bytes(), addr.to_bytes(), "{text} -> {rendered}");
            assert_eq!(rendered, text.to_uppercase());
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in [
            "GG:00:00:00",
            "AA:BB:CC",
            "AA:BB:CC:DD:EE",
            "A:BB:CC:DD",
            "AAA:BB:CC:DD",
            "AA-BB-CC-DD",
            "AABBCCDD",
            " AA:BB:CC:DD",
            "",
        ] {
            let err = bad.parse::<Address>().unwrap_err();
            assert_eq!(err, AddressParseError(bad.to_string()));
        }
    }

    #[test]
    fn lower_hex_is_unpadded_raw_value() {
        assert_eq!(format!("{:x}", Address::new(0x00AB_CDEF)), "abcdef");
        assert_eq!(format!("{:#x}", Address::new(0xAABB_CCDD)), "0xaabbccdd");
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&Address::new(0x0102_0304)).unwrap();
        assert_eq!(json, "\"01:02:03:04\"");
    }
}
