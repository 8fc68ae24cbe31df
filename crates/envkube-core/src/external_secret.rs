//! ExternalSecret manifest rendering
//!
//! Emits an `external-secrets.io/v1beta1` ExternalSecret wired to a
//! cluster-wide Vault store. The store reference (`vault-backend` /
//! `ClusterSecretStore`) and the 15 minute refresh interval are fixed;
//! only the metadata and the entry list vary with the input.

use crate::entry::Entry;

/// Render an ExternalSecret manifest pulling every secret entry from Vault.
///
/// Each secret entry becomes one `data` item whose `secretKey` and
/// `remoteRef.property` are the entry key; all items share the same
/// `vault_path`. Output is fully deterministic.
pub fn render_external_secret(
    entries: &[Entry],
    name: &str,
    namespace: &str,
    vault_path: &str,
) -> String {
    let mut yaml = format!(
        r#"apiVersion: external-secrets.io/v1beta1
kind: ExternalSecret
metadata:
  name: {name}
  namespace: {namespace}
spec:
  refreshInterval: "15m"
  secretStoreRef:
    name: vault-backend
    kind: ClusterSecretStore
  target:
    name: {name}
    creationPolicy: Owner
  data:
"#
    );

    for entry in entries.iter().filter(|e| e.is_secret) {
        yaml.push_str(&format!(
            "    - secretKey: {key}\n      remoteRef:\n        key: {vault_path}\n        property: {key}\n",
            key = entry.key,
        ));
    }

    yaml
}
