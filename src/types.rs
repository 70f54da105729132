use serde::{Deserialize, Serialize};

/// One printer port as the operator console configures it.
///
/// Serializable so callers can persist it alongside their other settings;
/// `enabled` defaults to true when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortConfig {
    /// Host name of the serial device
    pub port: String,
    /// Line speed in baud
    pub baud_rate: u32,
    /// Whether this printer takes part in batch sends
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl PortConfig {
    /// Config for a port that always takes part in sends.
    pub fn new(port: &str, baud_rate: u32) -> Self {
        PortConfig {
            port: port.to_string(),
            baud_rate,
            enabled: true,
        }
    }
}

/// What a batch send did with its port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every command was sent and acknowledged
    Completed,
    /// The port is disabled in its config; nothing was attempted
    Skipped,
}
