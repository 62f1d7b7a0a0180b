//! Entity data model and input loading.
//!
//! The input is the WHATWG `entities.json` file: a JSON object keyed by
//! raw reference strings (`"&amp;"`, or legacy aliases like `"&AMP"`
//! without the terminator), each value carrying the codepoint sequence
//! the reference expands to.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GenError, GenResult};

/// One record from the entity reference file.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    /// Unicode scalar values the entity expands to, in order.
    /// Always at least one; the source file guarantees this.
    pub codepoints: Vec<u32>,
    /// The expanded character string. Informational only — the table
    /// is built from `codepoints`.
    #[serde(default)]
    pub characters: String,
}

/// The full entity file: raw reference string → record.
///
/// The source mapping's native order carries no meaning, so iteration
/// order is fixed to sorted raw keys. Repeated runs over an unchanged
/// input therefore produce byte-identical output.
pub type EntityMap = BTreeMap<String, EntityRecord>;

/// Parse an already-read entity file.
pub fn parse_entities(raw: &[u8]) -> GenResult<EntityMap> {
    Ok(serde_json::from_slice(raw)?)
}

/// Read an entity file's raw bytes.
///
/// Split out from [`load_entities`] so a caller that also wants the
/// raw bytes (the CLI digests them for the provenance header) still
/// opens the file exactly once.
pub fn read_entities(path: &Path) -> GenResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| GenError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse an entity file such as the WHATWG `entities.json`.
pub fn load_entities(path: &Path) -> GenResult<EntityMap> {
    let raw = read_entities(path)?;
    parse_entities(&raw)
}

/// Eligibility rule deciding which raw keys make it into the table.
pub type KeyPredicate = fn(&str) -> bool;

/// The default eligibility rule: keep only `;`-terminated references.
///
/// The reference dataset carries duplicate legacy aliases without the
/// terminator (`&AMP` next to `&AMP;`). Only terminated names are
/// unambiguous to a parser that needs a delimiter to know where an
/// entity name ends, so unterminated entries are skipped, not errors.
pub fn semicolon_terminated(key: &str) -> bool {
    key.ends_with(';')
}

/// Strip the `&` / `;` framing from a raw reference key.
pub fn bare_name(key: &str) -> &str {
    let key = key.strip_prefix('&').unwrap_or(key);
    key.strip_suffix(';').unwrap_or(key)
}
