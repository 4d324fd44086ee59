use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregator::EndpointSpec;

/// Fixed endpoint set loaded by one dashboard flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientProfile {
    /// Single-page dashboard: status from `/health`, legacy `/flows`
    Spa,
    /// Multi-page site: root status, health with components, workflow list
    #[default]
    Site,
    /// Site plus the detailed `/status` component listing
    Full,
}

impl ClientProfile {
    pub fn endpoints(&self) -> Vec<EndpointSpec> {
        match self {
            ClientProfile::Spa => vec![EndpointSpec::health_status(), EndpointSpec::flows()],
            ClientProfile::Site => vec![
                EndpointSpec::system_status(),
                EndpointSpec::health(),
                EndpointSpec::workflows(),
            ],
            ClientProfile::Full => vec![
                EndpointSpec::system_status(),
                EndpointSpec::health(),
                EndpointSpec::detailed_status(),
                EndpointSpec::workflows(),
            ],
        }
    }
}

impl fmt::Display for ClientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientProfile::Spa => "spa",
            ClientProfile::Site => "site",
            ClientProfile::Full => "full",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ClientProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spa" => Ok(ClientProfile::Spa),
            "site" => Ok(ClientProfile::Site),
            "full" => Ok(ClientProfile::Full),
            other => Err(format!("unknown profile '{}' (expected spa, site or full)", other)),
        }
    }
}
