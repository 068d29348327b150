//! Identifier encoding for upstream URLs.

/// Percent-encodes an identifier as a URL path component.
///
/// Characters valid in a path segment pass through unchanged, `/` included,
/// so multi-segment identifiers keep their shape. Everything else is
/// encoded per UTF-8 byte (RFC 3986).
///
/// # Examples
///
/// ```
/// use depsearch_gosearch::encode_path_segment;
///
/// assert_eq!(
///     encode_path_segment("github.com/user/my repo"),
///     "github.com/user/my%20repo"
/// );
/// ```
pub fn encode_path_segment(id: &str) -> String {
    let mut result = String::with_capacity(id.len() + 10);

    for c in id.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '.' | '_' | '~') {
            result.push(c);
        } else {
            // Encode each byte of the UTF-8 representation
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            for &byte in encoded.as_bytes() {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }

    result
}
