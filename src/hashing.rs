/// Canonical hashing of suite reports.
///
/// Deterministic canonical serialization + SHA-256 hashing.
/// Produces byte-identical output across platforms.
///
/// Rules:
///   - Reports in the order given (the suite runs them in canonical order)
///   - Field order: suite_version, kernels; per report: kernel, lines
///   - UTF-8 JSON, no whitespace, no float, no platform newline

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::report::KernelReport;
use crate::SUITE_VERSION;

/// Canonical serialization of a suite run to UTF-8 JSON bytes.
pub fn canonical_serialize(reports: &[KernelReport]) -> Vec<u8> {
    build_canonical_value(reports).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(reports: &[KernelReport]) -> String {
    let digest = Sha256::digest(canonical_serialize(reports));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Build the canonical value in strict field order.
/// `serde_json::Map` preserves insertion order (feature `preserve_order`).
fn build_canonical_value(reports: &[KernelReport]) -> Value {
    let kernels: Vec<Value> = reports
        .iter()
        .map(|r| {
            let mut m = Map::new();
            m.insert("kernel".to_string(), Value::String(r.kernel.name().to_string()));
            m.insert(
                "lines".to_string(),
                Value::Array(r.lines.iter().cloned().map(Value::String).collect()),
            );
            Value::Object(m)
        })
        .collect();

    // suite_version first: it is part of the output identity.
    let mut root = Map::new();
    root.insert(
        "suite_version".to_string(),
        Value::Number(u64::from(SUITE_VERSION).into()),
    );
    root.insert("kernels".to_string(), Value::Array(kernels));
    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::KernelId;

    fn sample() -> Vec<KernelReport> {
        vec![KernelReport::new(
            KernelId::Fib,
            vec!["fib(35) = 9227465".to_string()],
        )]
    }

    #[test]
    fn test_canonical_bytes() {
        let s = String::from_utf8(canonical_serialize(&sample())).unwrap();
        assert_eq!(
            s,
            r#"{"suite_version":1,"kernels":[{"kernel":"fib","lines":["fib(35) = 9227465"]}]}"#
        );
    }

    #[test]
    fn test_hash_shape() {
        let h = canonical_hash(&sample());
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_sensitive_to_lines() {
        let mut other = sample();
        other[0].lines[0].push(' ');
        assert_ne!(canonical_hash(&sample()), canonical_hash(&other));
    }
}
