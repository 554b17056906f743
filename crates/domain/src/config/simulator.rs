use crate::icmp_error::{CODE_HOST_UNREACHABLE, TYPE_DESTINATION_UNREACHABLE};
use crate::{IcmpErrorKind, ResponseMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulatorConfig {
    /// Response mode token. Kept as a raw string so that an unknown token is
    /// reported per request instead of refusing to start.
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default = "default_icmp_type")]
    pub icmp_type: u8,

    #[serde(default = "default_icmp_code")]
    pub icmp_code: u8,
}

impl SimulatorConfig {
    pub fn parsed_mode(&self) -> Option<ResponseMode> {
        self.mode.parse().ok()
    }

    pub fn icmp_kind(&self) -> IcmpErrorKind {
        IcmpErrorKind::new(self.icmp_type, self.icmp_code)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            icmp_type: default_icmp_type(),
            icmp_code: default_icmp_code(),
        }
    }
}

fn default_mode() -> String {
    ResponseMode::ServerFailure.as_str().to_string()
}

fn default_icmp_type() -> u8 {
    TYPE_DESTINATION_UNREACHABLE
}

fn default_icmp_code() -> u8 {
    CODE_HOST_UNREACHABLE
}
