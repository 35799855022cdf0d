use crate::character_sets::{is_authority_terminator, is_host_terminator};
use crate::checkers::find_port_colon;
use crate::compat::{Cow, String};
use crate::helpers::{find_any, split_userinfo};

/// Pieces of an authority split off the front of the input.
/// `rest` is what follows the authority; it is owned only when part of a
/// non-numeric `:suffix` had to be handed back from the host.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Authority<'a> {
    pub auth: &'a str,
    pub host: &'a str,
    pub port: &'a str,
    pub ipv6: bool,
    pub rest: Cow<'a, str>,
}

/// Scan `userinfo@host:port` off the front of `input`.
pub fn scan_authority(input: &str) -> Authority<'_> {
    let auth_end = find_any(input, is_host_terminator).unwrap_or(input.len());
    let (auth, input) = split_userinfo(input, auth_end);

    let bytes = input.as_bytes();
    let mut host_end = find_any(input, is_authority_terminator).unwrap_or(bytes.len());
    // A bare colon right before the terminator is not part of the host
    if host_end > 0 && host_end < bytes.len() && bytes[host_end - 1] == b':' {
        host_end -= 1;
    }

    let candidate = &input[..host_end];
    let (mut host, port) = match find_port_colon(candidate.as_bytes()) {
        Some(colon) => (&candidate[..colon], &candidate[colon + 1..]),
        None => (candidate, ""),
    };
    if port.is_empty() && host.len() > 1 && host.ends_with(':') {
        host_end -= 1;
        host = &candidate[..host_end];
    }
    let rest = &input[host_end..];

    if host.len() > 2 && host.starts_with('[') && host.ends_with(']') {
        return Authority {
            auth,
            host: &host[1..host.len() - 1],
            port,
            ipv6: true,
            rest: Cow::Borrowed(rest),
        };
    }

    // A colon left in the host did not introduce a port; hand it back
    let (host, rest) = match memchr::memchr(b':', host.as_bytes()) {
        Some(colon) => {
            let mut owned = String::with_capacity(host.len() - colon + rest.len());
            owned.push_str(&host[colon..]);
            owned.push_str(rest);
            (&host[..colon], Cow::Owned(owned))
        }
        None => (host, Cow::Borrowed(rest)),
    };

    Authority {
        auth,
        host,
        port,
        ipv6: false,
        rest,
    }
}
