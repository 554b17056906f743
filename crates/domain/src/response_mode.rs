use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The failure a simulator instance answers every query with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseMode {
    #[serde(rename = "NOERROR")]
    NoError,
    #[serde(rename = "FORMERR")]
    FormatError,
    #[serde(rename = "SERVFAIL")]
    ServerFailure,
    #[serde(rename = "NOTIMPL")]
    NotImplemented,
    #[serde(rename = "ICMP_ERROR")]
    NetworkUnreachable,
}

impl ResponseMode {
    pub const ALL: [ResponseMode; 5] = [
        ResponseMode::NoError,
        ResponseMode::FormatError,
        ResponseMode::ServerFailure,
        ResponseMode::NotImplemented,
        ResponseMode::NetworkUnreachable,
    ];

    /// DNS RCODE carried in the response flags, or `None` for the ICMP mode
    /// which sends no DNS message at all.
    pub fn rcode(&self) -> Option<u8> {
        match self {
            ResponseMode::NoError => Some(0),
            ResponseMode::FormatError => Some(1),
            ResponseMode::ServerFailure => Some(2),
            ResponseMode::NotImplemented => Some(4),
            ResponseMode::NetworkUnreachable => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::NoError => "NOERROR",
            ResponseMode::FormatError => "FORMERR",
            ResponseMode::ServerFailure => "SERVFAIL",
            ResponseMode::NotImplemented => "NOTIMPL",
            ResponseMode::NetworkUnreachable => "ICMP_ERROR",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens are case-sensitive.
impl FromStr for ResponseMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| DomainError::InvalidMode(s.to_string()))
    }
}
