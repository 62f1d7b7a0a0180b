//! Command-line front end: locate the entity file, run the pipeline,
//! write the generated table to stdout.
//!
//! Invoked once per build by the build orchestration, which captures
//! stdout into the generated source file. Exit status is 0 on success
//! and nonzero on any failure; on failure nothing already written to
//! stdout may be used.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sha2::{Digest, Sha256};

use entgen::{build_table, emit_table, parse_entities, read_entities, TableOptions};

#[derive(Parser)]
#[command(
    name = "entgen",
    version,
    about = "Generate a static named-entity lookup table from entities.json"
)]
struct Args {
    /// Entity reference file. Defaults to `entities.json` next to the
    /// executable.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit at most N entries, in input order. For partial generation
    /// while developing; production runs leave this unset.
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

/// `entities.json` in the executable's own directory.
fn default_input() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine executable path")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join("entities.json"))
}

fn table_options(args: &Args) -> TableOptions {
    TableOptions {
        limit: args.limit,
        ..TableOptions::default()
    }
}

/// Provenance line for the generated header: input file name plus a
/// digest of its raw bytes.
fn provenance(input: &Path, raw: &[u8]) -> String {
    let digest = Sha256::digest(raw);
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    format!("{file_name} sha256:{digest:x}")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = match &args.input {
        Some(path) => path.clone(),
        None => default_input()?,
    };

    // Single read: the raw bytes feed both the provenance digest and
    // the parser.
    let raw = read_entities(&input)?;
    let entities = parse_entities(&raw)
        .with_context(|| format!("malformed entity file {}", input.display()))?;

    // Built fully in memory before anything hits stdout, so a failure
    // here leaves the output stream empty.
    let table = build_table(&entities, &table_options(&args))?;

    let mut out = BufWriter::new(io::stdout().lock());
    emit_table(&mut out, &table, Some(&provenance(&input, &raw)))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_required() {
        let args = Args::try_parse_from(["entgen"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.limit.is_none());
    }

    #[test]
    fn flags_parse() {
        let args =
            Args::try_parse_from(["entgen", "--input", "/tmp/ents.json", "--limit", "5"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("/tmp/ents.json")));
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn limit_flag_caps_the_table() {
        let args = Args::try_parse_from(["entgen", "--limit", "3"]).unwrap();
        assert_eq!(table_options(&args).limit, Some(3));
    }

    #[test]
    fn default_table_options_are_unlimited() {
        let args = Args::try_parse_from(["entgen"]).unwrap();
        assert_eq!(table_options(&args).limit, None);
    }

    #[test]
    fn provenance_names_the_file_and_digests_its_bytes() {
        let line = provenance(Path::new("/some/dir/entities.json"), b"abc");
        // sha256("abc")
        assert_eq!(
            line,
            "entities.json sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn provenance_is_stable_for_unchanged_bytes() {
        let raw = br#"{ "&amp;": { "codepoints": [38] } }"#;
        assert_eq!(
            provenance(Path::new("entities.json"), raw),
            provenance(Path::new("entities.json"), raw)
        );
    }
}
