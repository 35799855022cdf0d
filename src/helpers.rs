/// Split at the first occurrence of `delimiter`, dropping the delimiter.
/// The second half is empty when the delimiter is absent.
/// Optimization: Uses SIMD-accelerated memchr for the search
pub fn split_at_byte(input: &str, delimiter: u8) -> (&str, &str) {
    memchr::memchr(delimiter, input.as_bytes()).map_or((input, ""), |pos| {
        (&input[..pos], &input[pos + 1..])
    })
}

/// Position of the first byte accepted by `class`.
pub fn find_any(input: &str, class: fn(u8) -> bool) -> Option<usize> {
    input.bytes().position(class)
}

/// Split userinfo off the front of an authority.
/// Looks for the last `@` before `end`; returns (`auth`, `rest_after_at`).
pub fn split_userinfo(input: &str, end: usize) -> (&str, &str) {
    memchr::memrchr(b'@', &input.as_bytes()[..end]).map_or(("", input), |at| {
        (&input[..at], &input[at + 1..])
    })
}
