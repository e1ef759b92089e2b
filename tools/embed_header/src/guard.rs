//! Include-guard token derivation
//!
//! Names are raw bytes: whatever the caller passed on the command line.

/// Guard macro name for `name`: the name with one trailing underscore.
///
/// The name is not checked for being a valid C identifier.
pub fn header_guard(name: &[u8]) -> Vec<u8> {
    let mut guard = Vec::with_capacity(name.len() + 1);
    guard.extend_from_slice(name);
    guard.push(b'_');
    guard
}

/// Whether `name` is a plain C identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_c_identifier(name: &[u8]) -> bool {
    match name.split_first() {
        Some((first, rest)) if first.is_ascii_alphabetic() || *first == b'_' => {
            rest.iter().all(|c| c.is_ascii_alphanumeric() || *c == b'_')
        }
        _ => false,
    }
}
