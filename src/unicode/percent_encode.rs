use crate::character_sets::{is_encode_exempt, is_hex_digit};
use crate::compat::String;
use percent_encoding::percent_encode_byte;

/// Percent-encode bytes, leaving existing escapes alone.
///
/// Alphanumerics and `!#$&'()*+,-./:;=?@_~` pass through. A `%` followed by
/// two hex digits is kept as an escape with its digits upper-cased; any other
/// `%` becomes `%25`. Every other byte, including each byte of a non-ASCII
/// character or of an invalid UTF-8 sequence, becomes `%XX`.
pub fn encode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        if b == b'%' {
            match input.get(i + 1..i + 3) {
                Some(&[hi, lo]) if is_hex_digit(hi) && is_hex_digit(lo) => {
                    out.push('%');
                    out.push(char::from(hi.to_ascii_uppercase()));
                    out.push(char::from(lo.to_ascii_uppercase()));
                    i += 3;
                    continue;
                }
                _ => out.push_str("%25"),
            }
        } else if is_encode_exempt(b) {
            out.push(char::from(b));
        } else {
            out.push_str(percent_encode_byte(b));
        }
        i += 1;
    }

    out
}

/// Percent-encode a string, avoiding double encoding.
///
/// # Examples
///
/// ```
/// assert_eq!(rawurl::encode("a b%2"), "a%20b%252");
/// assert_eq!(rawurl::encode("%e2%82%ac"), "%E2%82%AC");
/// ```
pub fn encode(input: &str) -> String {
    let bytes = input.as_bytes();
    if bytes.iter().all(|&b| is_encode_exempt(b)) {
        return String::from(input);
    }
    encode_bytes(bytes)
}
