//! Context-free checks on request-line, header and variable text.

use url::Url;

/// Protocol versions accepted after the request target.
pub const SUPPORTED_VERSIONS: &[&str] = &["HTTP/1.0", "HTTP/1.1", "HTTP/2", "HTTP/2.0", "HTTP/3"];

/// RFC 7230 `tchar`.
#[inline]
pub fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

pub fn is_header_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_tchar)
}

/// `[A-Za-z0-9_.-]+`
pub fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

/// A method candidate is a word made of ASCII letters only.
pub fn looks_like_method(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

pub fn is_supported_version(version: &str) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}

/// Origin-form (`/path?query`), asterisk-form (`*`), or an absolute
/// `http`/`https` URL with a host.
pub fn is_valid_target(target: &str) -> bool {
    if target == "*" {
        return true;
    }
    if target.starts_with('/') {
        return !target.bytes().any(|b| b.is_ascii_control());
    }
    match Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
