//! Entity table generator — turns the WHATWG named-character-reference
//! file (`entities.json`) into a static Rust lookup table for a markup
//! parser.
//!
//! ```text
//! entities.json → Loader → Filter → Codepoint Encoder → Table Builder → Emitter → generated source
//! ```
//!
//! The generated artifact is a lazily initialized `name → UTF-8 bytes`
//! map plus a `MAX_ENTITY_LEN` constant bounding how far the consuming
//! parser has to scan for an entity name.

pub mod emit;
pub mod encode;
pub mod error;
pub mod model;
pub mod table;

pub use emit::emit_table;
pub use error::{GenError, GenResult};
pub use model::{
    bare_name, load_entities, parse_entities, read_entities, semicolon_terminated, EntityMap,
    EntityRecord, KeyPredicate,
};
pub use table::{build_table, EntityTable, TableEntry, TableOptions};
