//! Table Output Formatting

use colored::Colorize;
use tabled::{builder::Builder, settings::Style};

use super::MappingRow;

/// Format expanded mappings as a table
pub fn format_mappings_table(rows: &[MappingRow]) -> String {
    if rows.is_empty() {
        return "No mappings found".to_string();
    }

    let mut builder = Builder::default();

    builder.push_record(vec!["Address", "Button", "Value", "Group", "Action Code"]);

    for row in rows {
        let group = if row.group == 0 {
            row.group.to_string().dimmed().to_string()
        } else {
            row.group.to_string()
        };

        builder.push_record(vec![
            row.address.to_string(),
            row.button.to_string(),
            row.value.to_string(),
            group,
            format!("{} ({:#010x})", row.encoded, row.encoded),
        ]);
    }

    builder.build().with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actmap_codegen::Address;

    #[test]
    fn test_format_mappings_table() {
        let rows = vec![
            MappingRow {
                address: Address::new(0xAABB_CCDD),
                button: 3,
                value: 100,
                group: 1,
                encoded: 0x0100_0064,
            },
            MappingRow {
                address: Address::new(0x0102_0304),
                button: 0,
                value: 7,
                group: 0,
                encoded: 7,
            },
        ];

        let table = format_mappings_table(&rows);
        assert!(table.contains("AA:BB:CC:DD"));
        assert!(table.contains("01:02:03:04"));
        assert!(table.contains("0x01000064"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_mappings_table(&[]), "No mappings found");
    }
}
