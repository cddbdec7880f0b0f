// ── Wireless domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Key-management protocol parsed from a scan's flags string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum SecurityProtocol {
    #[strum(serialize = "WPA-PSK")]
    #[serde(rename = "WPA-PSK")]
    WpaPsk,
    #[strum(serialize = "WPA2-PSK")]
    #[serde(rename = "WPA2-PSK")]
    Wpa2Psk,
    #[strum(serialize = "WPA3-PSK")]
    #[serde(rename = "WPA3-PSK")]
    Wpa3Psk,
}

/// Protocols the shell can join with a passphrase.
pub const SUPPORTED_PROTOCOLS: [SecurityProtocol; 3] = [
    SecurityProtocol::WpaPsk,
    SecurityProtocol::Wpa2Psk,
    SecurityProtocol::Wpa3Psk,
];

/// Pairwise cipher parsed from a scan's flags string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Encryption {
    Ccmp,
    Tkip,
}

/// Derived security triple for a scanned network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityClassification {
    pub security: Option<SecurityProtocol>,
    pub encryption: Option<Encryption>,
    pub is_secured: bool,
}

/// Coarse signal quality bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SignalStrength {
    Weak,
    Good,
    Excellent,
    #[strum(serialize = "-")]
    Unknown,
}

impl SignalStrength {
    /// Bucket a raw signal reading: below 30 is weak, 70 and above excellent.
    pub fn from_reading(raw: &str) -> Self {
        match raw.trim().parse::<i32>() {
            Ok(v) if v < 30 => Self::Weak,
            Ok(v) if v < 70 => Self::Good,
            Ok(_) => Self::Excellent,
            Err(_) => Self::Unknown,
        }
    }
}

/// A network visible in the latest radio scan.
///
/// `security`, `encryption` and `is_secured` are derived from `flags` by
/// the classifier and stay `None` until it has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedNetwork {
    pub name: String,
    pub mac: String,
    pub frequency: String,
    pub signal: String,
    pub flags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_secured: Option<bool>,
}

impl ScannedNetwork {
    pub fn signal_strength(&self) -> SignalStrength {
        SignalStrength::from_reading(&self.signal)
    }

    /// Whether the classifier has annotated this record.
    pub fn is_classified(&self) -> bool {
        self.is_secured.is_some()
    }

    /// Apply a classification, leaving every source field untouched.
    pub fn annotate(&mut self, classification: SecurityClassification) {
        self.security = classification.security;
        self.encryption = classification.encryption;
        self.is_secured = Some(classification.is_secured);
    }
}

/// A saved credential record owned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownNetwork {
    pub network_id: String,
    pub ssid: String,
    pub flags: String,
}

/// Unified known + scanned view for a detail page.
///
/// Exists only for the duration of one page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledNetworkView {
    pub name: String,
    /// Present when the view was built from a saved network.
    pub network_id: Option<String>,
    pub mac: String,
    pub frequency: String,
    pub signal: String,
    pub signal_strength: SignalStrength,
    pub security: Option<SecurityProtocol>,
    pub encryption: Option<Encryption>,
    pub is_secured: bool,
    /// The saved record's flags, shown in place of the passphrase.
    pub passphrase: Option<String>,
}

/// Radio state plus the network currently joined, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WirelessStatus {
    pub enabled: bool,
    pub connected: Option<ScannedNetwork>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn protocol_round_trips_through_its_display_name() {
        assert_eq!(SecurityProtocol::Wpa2Psk.to_string(), "WPA2-PSK");
        assert_eq!(
            "WPA3-PSK".parse::<SecurityProtocol>().unwrap(),
            SecurityProtocol::Wpa3Psk
        );
        assert!("WEP".parse::<SecurityProtocol>().is_err());
        assert_eq!(Encryption::Ccmp.as_ref(), "CCMP");
    }

    #[test]
    fn signal_buckets() {
        assert_eq!(SignalStrength::from_reading("12"), SignalStrength::Weak);
        assert_eq!(SignalStrength::from_reading("30"), SignalStrength::Good);
        assert_eq!(SignalStrength::from_reading("69"), SignalStrength::Good);
        assert_eq!(SignalStrength::from_reading("70"), SignalStrength::Excellent);
        assert_eq!(SignalStrength::from_reading("-48"), SignalStrength::Weak);
        assert_eq!(SignalStrength::from_reading(""), SignalStrength::Unknown);
        assert_eq!(SignalStrength::Unknown.to_string(), "-");
    }

    #[test]
    fn unclassified_network_omits_derived_fields_in_json() {
        let net = ScannedNetwork {
            name: "Guest".into(),
            ..ScannedNetwork::default()
        };
        let json = serde_json::to_value(&net).unwrap();
        assert!(json.get("security").is_none());
        assert!(json.get("is_secured").is_none());
        assert!(!net.is_classified());
    }
}
