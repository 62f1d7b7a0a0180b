//! Table builder — filters the entity map and renders the data each
//! output statement needs, tracking the maximum bare-name length as it
//! goes.

use crate::encode::{annotation, escape_utf8};
use crate::error::GenResult;
use crate::model::{bare_name, semicolon_terminated, EntityMap, KeyPredicate};

/// Options controlling a build pass.
pub struct TableOptions {
    /// Emit at most this many entries. `None` emits everything; the
    /// cap exists for partial generation while developing, not for
    /// production tables.
    pub limit: Option<usize>,
    /// Which raw keys are eligible. Defaults to
    /// [`semicolon_terminated`], which matches the WHATWG dataset;
    /// other input sources can supply their own rule.
    pub eligible: KeyPredicate,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            limit: None,
            eligible: semicolon_terminated,
        }
    }
}

/// One entry of the generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Bare entity name (raw key without `&` / `;`).
    pub name: String,
    /// Concatenated `\xHH` escapes of the UTF-8 encoding of every
    /// codepoint, in order.
    pub escaped: String,
    /// Concatenated annotation tokens for the trailing comment.
    pub comment: String,
}

/// The built table: entries in emission order plus the name-length
/// bound consumed by the emitter.
#[derive(Debug, Clone)]
pub struct EntityTable {
    pub entries: Vec<TableEntry>,
    /// Longest bare name among the emitted entries. Zero when nothing
    /// was emitted.
    pub max_name_len: usize,
}

/// Run the filter/encode pass over the loaded entity map.
pub fn build_table(entities: &EntityMap, options: &TableOptions) -> GenResult<EntityTable> {
    let mut entries = Vec::new();
    let mut max_name_len = 0;
    let mut remaining = options.limit.unwrap_or(usize::MAX);

    for (key, record) in entities {
        if remaining == 0 {
            break;
        }
        if !(options.eligible)(key) {
            continue;
        }

        let name = bare_name(key);
        let mut escaped = String::new();
        let mut comment = String::new();
        for &cp in &record.codepoints {
            escaped.push_str(&escape_utf8(cp)?);
            comment.push_str(&annotation(cp)?);
        }

        max_name_len = max_name_len.max(name.len());
        entries.push(TableEntry {
            name: name.to_owned(),
            escaped,
            comment,
        });
        remaining -= 1;
    }

    Ok(EntityTable {
        entries,
        max_name_len,
    })
}
