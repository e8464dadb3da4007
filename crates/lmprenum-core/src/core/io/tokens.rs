//! Conversion of whitespace-free numeric tokens into typed field values.
//!
//! [`parse_token`] reports every failure. [`coerce_token`] applies the
//! zero-fallback policy used by the record parsers: a token that cannot be
//! converted becomes the zero value of its type instead of failing the line.

use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("'{token}' is not a valid {kind}")]
    Invalid { token: String, kind: &'static str },
    #[error("'{token}' is out of range for {kind}")]
    OutOfRange { token: String, kind: &'static str },
}

/// A numeric type that a single data-file token can be converted into.
pub trait NumericToken: Sized + Default {
    /// Human-readable type name used in error messages.
    const KIND: &'static str;

    fn parse_token(token: &str) -> Result<Self, TokenError>;
}

fn int_error(token: &str, kind: &'static str, e: &std::num::ParseIntError) -> TokenError {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TokenError::OutOfRange {
            token: token.to_string(),
            kind,
        },
        _ => TokenError::Invalid {
            token: token.to_string(),
            kind,
        },
    }
}

impl NumericToken for u32 {
    const KIND: &'static str = "unsigned 32-bit integer";

    /// Unsigned tokens carry no sign at all; `+5` is rejected like `-5`.
    fn parse_token(token: &str) -> Result<Self, TokenError> {
        if token.starts_with('+') {
            return Err(TokenError::Invalid {
                token: token.to_string(),
                kind: Self::KIND,
            });
        }
        token.parse().map_err(|e| int_error(token, Self::KIND, &e))
    }
}

impl NumericToken for i32 {
    const KIND: &'static str = "signed 32-bit integer";

    fn parse_token(token: &str) -> Result<Self, TokenError> {
        token.parse().map_err(|e| int_error(token, Self::KIND, &e))
    }
}

impl NumericToken for f64 {
    const KIND: &'static str = "64-bit float";

    fn parse_token(token: &str) -> Result<Self, TokenError> {
        let value: f64 = token.parse().map_err(|_| TokenError::Invalid {
            token: token.to_string(),
            kind: Self::KIND,
        })?;
        // A finite literal that overflowed, as opposed to an explicit `inf`.
        if value.is_infinite() && !token.to_ascii_lowercase().contains("inf") {
            return Err(TokenError::OutOfRange {
                token: token.to_string(),
                kind: Self::KIND,
            });
        }
        Ok(value)
    }
}

/// Converts `token`, reporting why it failed if it cannot be represented.
pub fn parse_token<T: NumericToken>(token: &str) -> Result<T, TokenError> {
    T::parse_token(token)
}

/// Converts `token`, substituting the zero value of `T` on any failure.
pub fn coerce_token<T: NumericToken>(token: &str) -> T {
    parse_token(token).unwrap_or_default()
}
