//! Configuration errors
//!
//! A [`ConfigError`] is a caller bug, not bad input: it is raised while a
//! chain is being built and never appears inside an [`Outcome`](crate::Outcome).

/// A chain method was called with parameters it cannot work with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `is_multiple_of(0)`
    #[error("divisor for is_multiple_of must be non-zero")]
    ZeroDivisor,

    /// A range bound that is not a `YYYY-MM-DD` calendar date
    #[error("date range bound `{0}` is not a valid YYYY-MM-DD date")]
    InvalidDateBound(String),

    /// An IP version name other than `IPv4`, `IPv6` or `any`
    #[error("unknown IP version `{0}` (expected IPv4, IPv6 or any)")]
    UnknownIpVersion(String),

    /// A CIDR policy name other than `required`, `forbidden` or `optional`
    #[error("unknown CIDR policy `{0}` (expected required, forbidden or optional)")]
    UnknownCidrPolicy(String),
}
