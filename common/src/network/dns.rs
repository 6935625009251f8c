//! Syntax check for DNS names such as the cluster domain.

use std::net::IpAddr;

const MAX_NAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Reports whether `name` is a syntactically valid DNS name.
///
/// Labels may contain ASCII letters, digits, `_` and `-`, must not start
/// with `-` and are at most 63 characters long. A single trailing dot is
/// accepted. IP literals are rejected even though they look like names.
pub fn is_dns_name(name: &str) -> bool {
    if name.is_empty() || name.chars().filter(|&c| c != '.').count() > MAX_NAME_LEN {
        return false;
    }
    if name.parse::<IpAddr>().is_ok() {
        return false;
    }

    let name = name.strip_suffix('.').unwrap_or(name);
    name.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let Some((first, rest)) = bytes.split_first() else {
        return false;
    };

    bytes.len() <= MAX_LABEL_LEN
        && (first.is_ascii_alphanumeric() || *first == b'_')
        && rest
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
