use std::fmt;

/// Deployment behavior selected by the `mode` key of the `[nucypher]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    Federated,
    Testing,
    Decentralized,
    Centralized,
}

impl OperatingMode {
    pub const ALL: [OperatingMode; 4] = [
        OperatingMode::Federated,
        OperatingMode::Testing,
        OperatingMode::Decentralized,
        OperatingMode::Centralized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperatingMode::Federated => "federated",
            OperatingMode::Testing => "testing",
            OperatingMode::Decentralized => "decentralized",
            OperatingMode::Centralized => "centralized",
        }
    }

    /// Parse a mode keyword as it appears in the ini file. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
