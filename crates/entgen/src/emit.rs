//! Emitter — wraps the built table in the generated-source template
//! and appends the name-length bound constant.

use std::io::{self, Write};

use crate::table::EntityTable;

/// Opening of the generated file: lazily initialized table, created on
/// first access. `OnceLock` gives the consumer one-time initialization
/// even when the first lookup happens on several threads at once.
const TEMPLATE_OPEN: &str = r#"
use std::collections::HashMap;
use std::sync::OnceLock;

/// Named character reference table, built once on first access.
pub fn entity_map() -> &'static HashMap<&'static str, &'static [u8]> {
    static ENTITIES: OnceLock<HashMap<&'static str, &'static [u8]>> = OnceLock::new();
    ENTITIES.get_or_init(|| {
        let mut map: HashMap<&'static str, &'static [u8]> = HashMap::new();
"#;

const TEMPLATE_CLOSE: &str = r#"        map
    })
}
"#;

/// Write the generated source for `table` to `out`.
///
/// `provenance`, when given, is appended to the header comment so a
/// reviewer can tell which input file produced the table. The emitted
/// values are byte-string literals, one `\xHH` escape per UTF-8 byte.
pub fn emit_table<W: Write>(
    out: &mut W,
    table: &EntityTable,
    provenance: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "// GENERATED by entgen — do not edit.")?;
    if let Some(provenance) = provenance {
        writeln!(out, "// input: {provenance}")?;
    }
    out.write_all(TEMPLATE_OPEN.as_bytes())?;

    for entry in &table.entries {
        writeln!(
            out,
            "        map.insert(\"{}\", b\"{}\"); // ( {} )",
            entry.name, entry.escaped, entry.comment
        )?;
    }

    out.write_all(TEMPLATE_CLOSE.as_bytes())?;
    writeln!(out)?;
    writeln!(out, "// so the parser doesn't search endlessly")?;
    writeln!(out, "pub const MAX_ENTITY_LEN: usize = {};", table.max_name_len)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableEntry;

    fn render(table: &EntityTable) -> String {
        let mut out = Vec::new();
        emit_table(&mut out, table, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn template_brackets_entries() {
        let table = EntityTable {
            entries: vec![TableEntry {
                name: "amp".to_owned(),
                escaped: "\\x26".to_owned(),
                comment: "&".to_owned(),
            }],
            max_name_len: 3,
        };
        let text = render(&table);
        assert!(text.starts_with("// GENERATED by entgen"));
        assert!(text.contains("OnceLock<HashMap<&'static str, &'static [u8]>>"));
        assert!(text.contains("        map.insert(\"amp\", b\"\\x26\"); // ( & )\n"));
        assert!(text.ends_with("pub const MAX_ENTITY_LEN: usize = 3;\n"));
    }

    #[test]
    fn provenance_line_present_when_given() {
        let table = EntityTable {
            entries: Vec::new(),
            max_name_len: 0,
        };
        let mut out = Vec::new();
        emit_table(&mut out, &table, Some("entities.json sha256:00ff")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("// input: entities.json sha256:00ff\n"));
    }
}
