/// Outcome of session token verification. Transient, per-request, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthResult {
    /// No token was presented.
    NoToken,
    /// A token was presented but its signature, expiry or claims are bad.
    Invalid,
    /// Verified subject identity and admin flag from the token claims.
    Ok { id: i64, admin: bool },
}
