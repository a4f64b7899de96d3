//! Symbolic landscape state with attached numeric codes.
//!
//! Both enumerations convert to and from their signed integer code so a
//! saved state stays a handful of scalars. Conversions from a code are total
//! and reject anything outside `{-1, 0, 1}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SymbolError {
    #[error("domain code must be one of [-1, 0, 1], but is {0}")]
    InvalidDomain(f64),
    #[error("system response code must be one of [-1, 0, 1], but is {0}")]
    InvalidSystemResponse(f64),
}

/// Side of the neutral zone the control position has committed to.
///
/// `Initial` means no side has been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Domain {
    Positive,
    #[default]
    Initial,
    Negative,
}

impl Domain {
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Initial => 0,
            Self::Negative => -1,
        }
    }

    /// Domain on the side of `sign`. Zero maps to `Initial`.
    #[must_use]
    pub const fn from_sign(sign: i32) -> Self {
        if sign > 0 {
            Self::Positive
        } else if sign < 0 {
            Self::Negative
        } else {
            Self::Initial
        }
    }

    /// Parse a domain from a serialized floating point code.
    pub fn from_code(code: f64) -> Result<Self, SymbolError> {
        if code == 1.0 {
            Ok(Self::Positive)
        } else if code == 0.0 {
            Ok(Self::Initial)
        } else if code == -1.0 {
            Ok(Self::Negative)
        } else {
            Err(SymbolError::InvalidDomain(code))
        }
    }
}

impl TryFrom<i32> for Domain {
    type Error = SymbolError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Positive),
            0 => Ok(Self::Initial),
            -1 => Ok(Self::Negative),
            other => Err(SymbolError::InvalidDomain(f64::from(other))),
        }
    }
}

impl From<Domain> for i32 {
    fn from(domain: Domain) -> Self {
        domain.value()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Initial => "initial",
            Self::Negative => "negative",
        };
        f.write_str(name)
    }
}

/// Whether the current rotation direction works in the controller's favor.
///
/// This is a hysteresis flag: it turns `Disadvantageous` once the landscape
/// has rotated a quarter turn and only comes back through a domain change or
/// a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SystemResponse {
    #[default]
    Advantageous,
    Disadvantageous,
    Neutral,
}

impl SystemResponse {
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Advantageous => 1,
            Self::Disadvantageous => -1,
            Self::Neutral => 0,
        }
    }

    /// Parse a system response from a serialized floating point code.
    pub fn from_code(code: f64) -> Result<Self, SymbolError> {
        if code == 1.0 {
            Ok(Self::Advantageous)
        } else if code == -1.0 {
            Ok(Self::Disadvantageous)
        } else if code == 0.0 {
            Ok(Self::Neutral)
        } else {
            Err(SymbolError::InvalidSystemResponse(code))
        }
    }
}

impl TryFrom<i32> for SystemResponse {
    type Error = SymbolError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Advantageous),
            -1 => Ok(Self::Disadvantageous),
            0 => Ok(Self::Neutral),
            other => Err(SymbolError::InvalidSystemResponse(f64::from(other))),
        }
    }
}

impl From<SystemResponse> for i32 {
    fn from(response: SystemResponse) -> Self {
        response.value()
    }
}

impl fmt::Display for SystemResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Advantageous => "advantageous",
            Self::Disadvantageous => "disadvantageous",
            Self::Neutral => "neutral",
        };
        f.write_str(name)
    }
}
