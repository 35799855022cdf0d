use crate::character_sets::is_digit;

/// Find the colon that separates a numeric port from the host.
///
/// Scans backward from the last byte over digits. A `:` reached that way
/// splits host and port; any other byte, or a candidate shorter than two
/// bytes, means there is no port.
pub fn find_port_colon(candidate: &[u8]) -> Option<usize> {
    let (&last, head) = candidate.split_last()?;
    if head.is_empty() || !is_digit(last) {
        return None;
    }

    let pos = head.iter().rposition(|&b| !is_digit(b))?;
    (head[pos] == b':').then_some(pos)
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(is_digit) {
        return None;
    }
    port.parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_port_colon() {
        assert_eq!(find_port_colon(b"host:8080"), Some(4));
        assert_eq!(find_port_colon(b"a:b:80"), Some(3));
        assert_eq!(find_port_colon(b":1"), Some(0));
        assert_eq!(find_port_colon(b"[::1]:80"), Some(5));

        assert_eq!(find_port_colon(b"host"), None);
        assert_eq!(find_port_colon(b"host8080"), None);
        assert_eq!(find_port_colon(b"8080"), None);
        assert_eq!(find_port_colon(b"ho:st1"), None);
        assert_eq!(find_port_colon(b"host:"), None);
        assert_eq!(find_port_colon(b"1"), None);
        assert_eq!(find_port_colon(b""), None);
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Some(80));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("65536"), None); // Out of range
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port(""), None);
    }
}
