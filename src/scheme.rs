use crate::character_sets::{is_letter, is_scheme_char};
use crate::error::{ParseError, Result};
use crate::types::SchemeType;

/// Get the scheme type from a lower-cased scheme string.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first()) {
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        (6, Some(b'g')) if bytes == b"gopher" => SchemeType::Gopher,
        (10, Some(b'j')) if bytes == b"javascript" => SchemeType::Javascript,
        _ => SchemeType::Other,
    }
}

/// Find the colon that ends a leading scheme.
///
/// Returns `Ok(None)` when the input doesn't open with `letter *scheme-char ':'`.
///
/// # Errors
///
/// Returns `ParseError::MissingScheme` if the input starts with `:`.
pub fn find_scheme_end(input: &str) -> Result<Option<usize>> {
    let bytes = input.as_bytes();
    match bytes.first() {
        None => return Ok(None),
        Some(b':') => return Err(ParseError::MissingScheme),
        Some(&b) if !is_letter(b) => return Ok(None),
        Some(_) => {}
    }

    Ok(bytes[1..]
        .iter()
        .position(|&b| !is_scheme_char(b))
        .map(|pos| pos + 1)
        .filter(|&end| bytes[end] == b':'))
}
