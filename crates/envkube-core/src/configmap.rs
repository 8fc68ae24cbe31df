//! ConfigMap manifest rendering

use crate::entry::Entry;

/// Render a `v1/ConfigMap` manifest holding every non-secret entry.
///
/// Entries keep their input order and values are always double-quoted in
/// the output, whatever quoting the source used. Embedded quotes and
/// other YAML metacharacters are not escaped - known limitation of the
/// string-template emitter. With no non-secret entries the `data:` block
/// is emitted empty.
pub fn render_config_map(entries: &[Entry], name: &str, namespace: &str) -> String {
    let mut yaml = format!(
        r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: {name}
  namespace: {namespace}
data:
"#
    );

    for entry in entries.iter().filter(|e| !e.is_secret) {
        yaml.push_str(&format!("  {}: \"{}\"\n", entry.key, entry.value));
    }

    yaml
}
