//! End-to-end tests: mapping file text in, generated lookup code out.

use actmap_codegen::{
    generate, generate_cpp, parse_config, Address, ConfigError, MappingStore, OutputTarget,
};

const BRIDGE_CONF: &str = "\
# Living room wall switch, all rockers map to scene offsets
group 1
AA:BB:CC:DD 3 100
group 2
AA:BB:CC:DD -1 0

# Hallway switch, release event included
group 0
fe:ed:00:01 -2 500
fe:ed:00:01 0 42 release only
";

/// Evaluate generated C++ by reading its `case` table back.
///
/// Walks the nested `switch` the same way the compiled function would.
fn eval_cpp(source: &str, addr: u32, button: u8) -> i32 {
    let addr_case = format!("    case {addr:#x}:");
    let mut in_addr = false;
    for line in source.lines() {
        if line.starts_with("    case ") {
            in_addr = line == addr_case;
            continue;
        }
        if !in_addr {
            continue;
        }
        if let Some(rest) = line.trim().strip_prefix("case ") {
            let (btn, ret) = rest.split_once(": return ").unwrap();
            if btn.parse::<u8>().unwrap() == button {
                return ret.trim_end_matches(';').parse().unwrap();
            }
        }
        if line.trim() == "}" {
            in_addr = false;
        }
    }
    0
}

fn store() -> MappingStore {
    parse_config(BRIDGE_CONF).unwrap()
}

#[test]
fn worked_example_overwrites_literal_with_wildcard() {
    let store = store();
    let addr = Address::new(0xAABB_CCDD);
    for idx in 1u8..=8 {
        assert_eq!(
            store.lookup(addr, idx),
            i32::from(idx) | 0x0200_0000,
            "button {idx}"
        );
    }
    assert_eq!(store.lookup(addr, 0), 0);
}

#[test]
fn generated_cpp_agrees_with_store_for_every_pair() {
    let store = store();
    let cpp = generate_cpp(&store);
    let addrs = [0xAABB_CCDD_u32, 0xFEED_0001, 0x0000_0000, 0x1234_5678];
    for addr in addrs {
        for button in 0u8..=12 {
            assert_eq!(
                eval_cpp(&cpp, addr, button),
                store.lookup(Address::new(addr), button),
                "addr {addr:#x} button {button}"
            );
        }
    }
}

#[test]
fn literal_after_wildcard_replaces_value_without_offset() {
    let store = store();
    let addr = Address::new(0xFEED_0001);
    assert_eq!(store.lookup(addr, 0), 42);
    assert_eq!(store.lookup(addr, 1), 501);
    assert_eq!(store.lookup(addr, 8), 508);
}

#[test]
fn emission_order_follows_first_insertion() {
    let cpp = generate_cpp(&store());
    let first = cpp.find("case 0xaabbccdd:").unwrap();
    let second = cpp.find("case 0xfeed0001:").unwrap();
    assert!(first < second);

    let block = &cpp[first..second];
    let buttons: Vec<&str> = block
        .lines()
        .filter_map(|l| l.trim().strip_prefix("case "))
        .filter_map(|l| l.split(':').next())
        .filter(|b| !b.starts_with("0x"))
        .collect();
    assert_eq!(buttons, vec!["3", "1", "2", "4", "5", "6", "7", "8"]);
}

#[test]
fn regenerating_unchanged_config_is_byte_identical() {
    for target in [OutputTarget::Cpp, OutputTarget::Rust] {
        let a = generate(&parse_config(BRIDGE_CONF).unwrap(), target);
        let b = generate(&parse_config(BRIDGE_CONF).unwrap(), target);
        assert_eq!(a, b, "{target:?}");
    }
}

#[test]
fn errors_identify_offending_line() {
    let conf = BRIDGE_CONF.replace("fe:ed:00:01 0 42", "fe:ed:00:01 9 42");
    let err = parse_config(&conf).unwrap_err();
    assert!(matches!(err, ConfigError::ButtonOutOfRange { .. }), "{err:?}");
    assert_eq!(err.line(), 10);
    assert_eq!(err.text(), "fe:ed:00:01 9 42 release only");
}
