/// Mark every byte of `bytes` in `table`.
const fn mark(mut table: [bool; 256], bytes: &[u8]) -> [bool; 256] {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = true;
        i += 1;
    }
    table
}

/// Mark the inclusive byte range `from..=to` in `table`.
const fn mark_range(mut table: [bool; 256], from: u8, to: u8) -> [bool; 256] {
    let mut i = from;
    while i <= to {
        table[i as usize] = true;
        i += 1;
    }
    table
}

const DIGIT_TABLE: [bool; 256] = mark_range([false; 256], b'0', b'9');

const LETTER_TABLE: [bool; 256] = mark_range(mark_range([false; 256], b'a', b'z'), b'A', b'Z');

const HEX_DIGIT_TABLE: [bool; 256] =
    mark_range(mark_range(DIGIT_TABLE, b'a', b'f'), b'A', b'F');

const ALPHANUMERIC_TABLE: [bool; 256] =
    mark_range(mark_range(DIGIT_TABLE, b'a', b'z'), b'A', b'Z');

/// Bytes allowed after the first letter of a scheme
const SCHEME_CHAR_TABLE: [bool; 256] = mark(ALPHANUMERIC_TABLE, b"+-.");

/// Bytes that end the authority before userinfo is split off
const HOST_TERMINATOR_TABLE: [bool; 256] = mark([false; 256], b"#/?");

/// Bytes that end the host/port run once userinfo is gone
const AUTHORITY_TERMINATOR_TABLE: [bool; 256] =
    mark([false; 256], b"\t\r\n \"#%'/;<>?\\^`{|}");

/// Bytes the encoder passes through untouched
const ENCODE_EXEMPT_TABLE: [bool; 256] = mark(ALPHANUMERIC_TABLE, b"!#$&'()*+,-./:;=?@_~");

/// Check if a byte is an ASCII hex digit (`0-9`, `a-f`, `A-F`)
pub fn is_hex_digit(b: u8) -> bool {
    HEX_DIGIT_TABLE[b as usize]
}

/// Check if a byte is an ASCII letter
pub fn is_letter(b: u8) -> bool {
    LETTER_TABLE[b as usize]
}

/// Check if a byte is an ASCII decimal digit
pub fn is_digit(b: u8) -> bool {
    DIGIT_TABLE[b as usize]
}

pub fn is_scheme_char(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize]
}

pub fn is_host_terminator(b: u8) -> bool {
    HOST_TERMINATOR_TABLE[b as usize]
}

pub fn is_authority_terminator(b: u8) -> bool {
    AUTHORITY_TERMINATOR_TABLE[b as usize]
}

pub fn is_encode_exempt(b: u8) -> bool {
    ENCODE_EXEMPT_TABLE[b as usize]
}

/// Value of a hex digit. Callers check `is_hex_digit` first.
pub fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Decode the two hex digits following a `%` at `pos`, if both are present.
pub fn percent_escape_at(bytes: &[u8], pos: usize) -> Option<u8> {
    match bytes.get(pos..pos + 3) {
        Some(&[b'%', hi, lo]) if is_hex_digit(hi) && is_hex_digit(lo) => {
            Some((hex_value(hi) << 4) | hex_value(lo))
        }
        _ => None,
    }
}
