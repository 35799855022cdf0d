use crate::character_sets::percent_escape_at;
use crate::compat::String;
use core::char::REPLACEMENT_CHARACTER;

/// Number of continuation bytes announced by a UTF-8 lead byte.
/// Returns `None` for bytes that cannot start a multi-byte sequence.
fn continuation_count(lead: u8) -> Option<usize> {
    match lead {
        b if b & 0xE0 == 0xC0 => Some(1),
        b if b & 0xF0 == 0xE0 => Some(2),
        b if b & 0xF8 == 0xF0 => Some(3),
        _ => None,
    }
}

/// Read one byte of a multi-byte sequence, either escaped or literal.
/// Returns the byte and the position after it.
fn next_byte(input: &[u8], pos: usize) -> Option<(u8, usize)> {
    percent_escape_at(input, pos)
        .map(|b| (b, pos + 3))
        .or_else(|| input.get(pos).map(|&b| (b, pos + 1)))
}

/// First character of `bytes`, or `None` when they open with invalid UTF-8.
fn leading_char(bytes: &[u8]) -> Option<char> {
    let head = &bytes[..bytes.len().min(4)];
    let valid = match core::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars().next()
}

/// Decode the escape at `pos` whose byte value is `lead`, reassembling a
/// multi-byte character from the bytes after it when `lead` announces one.
/// Returns the position to resume scanning from.
fn decode_escape(input: &[u8], pos: usize, lead: u8, out: &mut String) -> usize {
    if lead < 0x80 {
        out.push(char::from(lead));
        return pos + 3;
    }

    let Some(count) = continuation_count(lead) else {
        out.push(REPLACEMENT_CHARACTER);
        return pos + 3;
    };

    let mut seq = [lead, 0, 0, 0];
    let mut next = pos + 3;
    for slot in &mut seq[1..=count] {
        match next_byte(input, next) {
            Some((b, after)) if b & 0xC0 == 0x80 => {
                *slot = b;
                next = after;
            }
            // Only the lead escape is consumed; the rest is rescanned
            _ => {
                out.push(REPLACEMENT_CHARACTER);
                return pos + 3;
            }
        }
    }

    // Overlong forms and surrogates pass the bit-pattern check above
    match core::str::from_utf8(&seq[..=count]) {
        Ok(s) => out.push_str(s),
        Err(_) => out.push(REPLACEMENT_CHARACTER),
    }
    next
}

/// Decode percent-encoded bytes into a string.
///
/// Escapes that are not followed by two hex digits are left as is. Escaped
/// bytes at or above `0x80` are reassembled into UTF-8 characters; sequences
/// that don't form a valid character become U+FFFD. Raw bytes that aren't
/// valid UTF-8 are replaced with U+FFFD one byte at a time.
pub fn decode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if let Some(b) = percent_escape_at(input, i) {
            i = decode_escape(input, i, b, &mut out);
            continue;
        }

        match leading_char(&input[i..]) {
            Some(c) => {
                out.push(c);
                i += c.len_utf8();
            }
            None => {
                out.push(REPLACEMENT_CHARACTER);
                i += 1;
            }
        }
    }

    out
}

/// Decode a percent-encoded string.
///
/// Never fails: malformed escapes pass through and undecodable sequences
/// become U+FFFD.
///
/// # Examples
///
/// ```
/// assert_eq!(rawurl::decode("%E2%82%ac"), "€");
/// assert_eq!(rawurl::decode("100%zz"), "100%zz");
/// ```
pub fn decode(input: &str) -> String {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return String::from(input);
    }
    decode_bytes(input.as_bytes())
}
