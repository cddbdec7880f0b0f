// ── Network reconciler ──
//
// Joins saved networks with the live scan by SSID to build the view a
// detail page renders. Pure lookups; first scan-order match wins.

use crate::classify::classify;
use crate::error::CoreError;
use crate::model::{KnownNetwork, ReconciledNetworkView, ScannedNetwork};

/// Build the detail view for a saved network.
///
/// Fails with `NotFound` if no known network has `target_id`, or if its
/// SSID is not in the current scan.
pub fn reconcile(
    known: &[KnownNetwork],
    scanned: &[ScannedNetwork],
    target_id: &str,
) -> Result<ReconciledNetworkView, CoreError> {
    let record = known
        .iter()
        .find(|k| k.network_id == target_id)
        .ok_or_else(|| CoreError::not_found("Known network", target_id))?;

    let live = first_named(scanned, &record.ssid)
        .ok_or_else(|| CoreError::not_found("Network in range", &record.ssid))?;

    let mut view = view_of(live);
    view.network_id = Some(record.network_id.clone());
    view.passphrase = Some(record.flags.clone());
    Ok(view)
}

/// Build the detail view for a network straight from the scan.
pub fn reconcile_by_name(
    scanned: &[ScannedNetwork],
    target_name: &str,
) -> Result<ReconciledNetworkView, CoreError> {
    first_named(scanned, target_name)
        .map(view_of)
        .ok_or_else(|| CoreError::not_found("Network", target_name))
}

fn first_named<'a>(scanned: &'a [ScannedNetwork], name: &str) -> Option<&'a ScannedNetwork> {
    scanned.iter().find(|s| s.name == name)
}

fn view_of(network: &ScannedNetwork) -> ReconciledNetworkView {
    // Entries that bypassed the pipeline still get derived fields.
    let derived = classify(&network.flags);
    let (security, encryption, is_secured) = if network.is_classified() {
        (
            network.security,
            network.encryption,
            network.is_secured.unwrap_or(derived.is_secured),
        )
    } else {
        (derived.security, derived.encryption, derived.is_secured)
    };

    ReconciledNetworkView {
        name: network.name.clone(),
        network_id: None,
        mac: network.mac.clone(),
        frequency: network.frequency.clone(),
        signal: network.signal.clone(),
        signal_strength: network.signal_strength(),
        security,
        encryption,
        is_secured,
        passphrase: None,
    }
}
