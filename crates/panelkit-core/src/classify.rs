// ── Network classifier ──
//
// Derives security protocol, cipher and the secured flag from the
// vendor flags string of a scan entry. Pure: no I/O, no state.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{
    Encryption, SUPPORTED_PROTOCOLS, ScannedNetwork, SecurityClassification, SecurityProtocol,
};

static SECURITY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[(WPA[23]?-PSK)-").ok());

static ENCRYPTION_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-(CCMP|TKIP)\]").ok());

fn first_capture<'a>(re: &LazyLock<Option<Regex>>, flags: &'a str) -> Option<&'a str> {
    re.as_ref()?
        .captures(flags)?
        .get(1)
        .map(|m| m.as_str())
}

/// Classify a flags string such as `[WPA2-PSK-CCMP][ESS]`.
///
/// Unrecognized input yields no protocol, no cipher and `is_secured = false`.
pub fn classify(flags: &str) -> SecurityClassification {
    let security = first_capture(&SECURITY_RE, flags)
        .and_then(|s| s.parse::<SecurityProtocol>().ok());
    let encryption =
        first_capture(&ENCRYPTION_RE, flags).and_then(|s| s.parse::<Encryption>().ok());
    let is_secured = security.is_some_and(|p| SUPPORTED_PROTOCOLS.contains(&p));

    SecurityClassification {
        security,
        encryption,
        is_secured,
    }
}

/// Annotate one scan entry from its own flags.
pub fn classify_in_place(network: &mut ScannedNetwork) {
    let classification = classify(&network.flags);
    network.annotate(classification);
}

/// Annotate a whole scan, preserving order.
pub fn classify_all(networks: &mut [ScannedNetwork]) {
    networks.iter_mut().for_each(classify_in_place);
}
