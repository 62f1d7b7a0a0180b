//! Codepoint encoder — one Unicode scalar value to its escaped UTF-8
//! byte sequence and its annotation token.

use std::fmt::Write;

use crate::error::{GenError, GenResult};

/// Render one codepoint as the `\xHH` escapes of its UTF-8 bytes.
///
/// Standard UTF-8: 1 byte up to U+007F, 2 up to U+07FF, 3 up to
/// U+FFFF, 4 up to U+10FFFF. Each byte is a lowercase zero-padded
/// two-hex-digit escape, concatenated with no separator, so the result
/// can sit inside a byte-string literal in the generated source.
///
/// Fails with [`GenError::InvalidCodepoint`] for surrogates and values
/// above U+10FFFF.
pub fn escape_utf8(cp: u32) -> GenResult<String> {
    let ch = char::from_u32(cp).ok_or(GenError::InvalidCodepoint(cp))?;
    let mut buf = [0u8; 4];
    let bytes = ch.encode_utf8(&mut buf).as_bytes();
    let mut out = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        write!(out, "\\x{b:02x}").expect("writing to a String is infallible");
    }
    Ok(out)
}

/// The annotation token for the entry comment: `LF` and `HT` stand in
/// for the two codepoints that would garble a line comment, everything
/// else is the literal character.
pub fn annotation(cp: u32) -> GenResult<String> {
    let ch = char::from_u32(cp).ok_or(GenError::InvalidCodepoint(cp))?;
    Ok(match ch {
        '\n' => "LF".to_owned(),
        '\t' => "HT".to_owned(),
        _ => ch.to_string(),
    })
}
