//! Mapping file parser
//!
//! Reads the line-oriented mapping format and feeds validated entries into a
//! [`MappingStore`]:
//!
//! ```text
//! # comment
//! group <integer>
//! <addr> <button> <value> [ignored extra tokens...]
//! ```
//!
//! `<addr>` is `##:##:##:##` in hex, `<button>` is `-2..=8` and `<value>` a
//! signed integer. Button `-1` expands to buttons 1–8 and `-2` to buttons
//! 0–8, each receiving `value + button`; a literal button keeps `value`
//! unchanged. The first invalid line aborts parsing.

use tracing::{debug, trace};

use crate::address::Address;
use crate::error::{ConfigError, ConfigResult};
use crate::store::MappingStore;

/// Directive keyword switching the current group.
pub const GROUP_KEYWORD: &str = "group";

/// Button directive expanding to buttons 1 through 8.
pub const ALL_PRESSED_BUTTONS: i64 = -1;

/// Button directive expanding to buttons 0 through 8.
pub const ALL_BUTTONS: i64 = -2;

/// Highest concrete button index.
pub const MAX_BUTTON: u8 = 8;

/// Line-by-line parser writing into a borrowed [`MappingStore`].
#[derive(Debug)]
pub struct ConfigParser<'a> {
    store: &'a mut MappingStore,
    group: i64,
}

impl<'a> ConfigParser<'a> {
    pub fn new(store: &'a mut MappingStore) -> Self {
        Self { store, group: 0 }
    }

    /// Group applied to mapping lines parsed from now on.
    pub fn current_group(&self) -> i64 {
        self.group
    }

    /// Parse a whole file, stopping at the first error.
    pub fn parse_str(&mut self, text: &str) -> ConfigResult<()> {
        for (idx, line) in text.lines().enumerate() {
            self.parse_line(idx + 1, line)?;
        }
        Ok(())
    }

    /// Parse one line; `line_no` is only used for error reporting.
    pub fn parse_line(&mut self, line_no: usize, line: &str) -> ConfigResult<()> {
        if line.is_empty() || line.starts_with('#') {
            trace!(line = line_no, "skipped");
            return Ok(());
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.first() == Some(&GROUP_KEYWORD) {
            return self.parse_group(line_no, line, &tokens);
        }
        self.parse_mapping(line_no, line, &tokens)
    }

    fn parse_group(&mut self, line_no: usize, line: &str, tokens: &[&str]) -> ConfigResult<()> {
        let invalid = || ConfigError::InvalidGroupDirective {
            line: line_no,
            text: line.to_string(),
        };

        let [_, arg] = tokens else {
            return Err(invalid());
        };
        self.group = arg.parse().map_err(|_| invalid())?;
        debug!(line = line_no, group = self.group, "group changed");
        Ok(())
    }

    fn parse_mapping(&mut self, line_no: usize, line: &str, tokens: &[&str]) -> ConfigResult<()> {
        let [addr_tok, button_tok, value_tok, ..] = tokens else {
            return Err(ConfigError::InvalidTupleArity {
                line: line_no,
                text: line.to_string(),
                found: tokens.len(),
            });
        };

        let address: Address =
            addr_tok
                .parse()
                .map_err(|_| ConfigError::InvalidAddressFormat {
                    line: line_no,
                    text: line.to_string(),
                    token: addr_tok.to_string(),
                })?;

        let button = button_tok
            .parse::<i64>()
            .ok()
            .filter(|b| (ALL_BUTTONS..=i64::from(MAX_BUTTON)).contains(b))
            .ok_or_else(|| ConfigError::ButtonOutOfRange {
                line: line_no,
                text: line.to_string(),
                token: button_tok.to_string(),
            })?;

        let value: i64 = value_tok.parse().map_err(|_| ConfigError::InvalidValue {
            line: line_no,
            text: line.to_string(),
            token: value_tok.to_string(),
        })?;

        self.add_mapping(address, button, value);
        Ok(())
    }

    /// Record one validated line, expanding wildcard buttons.
    fn add_mapping(&mut self, address: Address, button: i64, value: i64) {
        let group = self.group;
        let first = match button {
            ALL_PRESSED_BUTTONS => 1,
            ALL_BUTTONS => 0,
            literal => {
                // Range was checked by the caller.
                self.store.record(address, literal as u8, value, group);
                return;
            }
        };
        for idx in first..=MAX_BUTTON {
            self.store
                .record(address, idx, value.wrapping_add(i64::from(idx)), group);
        }
    }
}

/// Parse a complete mapping file into a fresh store.
pub fn parse_config(text: &str) -> ConfigResult<MappingStore> {
    let mut store = MappingStore::new();
    ConfigParser::new(&mut store).parse_str(text)?;
    Ok(store)
}
