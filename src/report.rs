/// Kernel identities and report records.
///
/// A report is the exact text a kernel prints, one entry per stdout line.
/// Reports are pure data; they carry no execution logic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every kernel in the suite, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelId {
    Fannkuch,
    Fib,
    KvLookup,
    MatrixMult,
    PrimesSieve,
    Sort,
    StringOps,
    Tree,
    Nbody,
}

impl KernelId {
    pub const ALL: [KernelId; 9] = [
        KernelId::Fannkuch,
        KernelId::Fib,
        KernelId::KvLookup,
        KernelId::MatrixMult,
        KernelId::PrimesSieve,
        KernelId::Sort,
        KernelId::StringOps,
        KernelId::Tree,
        KernelId::Nbody,
    ];

    /// Name shared by the standalone binary and the golden fixture.
    pub fn name(self) -> &'static str {
        match self {
            KernelId::Fannkuch => "fannkuch",
            KernelId::Fib => "fib",
            KernelId::KvLookup => "kv_lookup",
            KernelId::MatrixMult => "matrix_mult",
            KernelId::PrimesSieve => "primes_sieve",
            KernelId::Sort => "sort",
            KernelId::StringOps => "string_ops",
            KernelId::Tree => "tree",
            KernelId::Nbody => "nbody",
        }
    }
}

impl fmt::Display for KernelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KernelId::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("Unknown kernel {:?}", s))
    }
}

/// Output of one kernel run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KernelReport {
    pub kernel: KernelId,
    pub lines: Vec<String>,
}

impl KernelReport {
    pub fn new(kernel: KernelId, lines: Vec<String>) -> Self {
        Self { kernel, lines }
    }

    /// Report text as printed, newline-terminated.
    pub fn stdout(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for k in KernelId::ALL {
            assert_eq!(k.name().parse::<KernelId>().unwrap(), k);
        }
        assert!("quicksort".parse::<KernelId>().is_err());
    }

    #[test]
    fn test_serde_name_matches_binary_name() {
        for k in KernelId::ALL {
            let json = serde_json::to_string(&k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.name()));
        }
    }

    #[test]
    fn test_stdout() {
        let r = KernelReport::new(
            KernelId::Fannkuch,
            vec!["228".to_string(), "Pfannkuchen(7) = 16".to_string()],
        );
        assert_eq!(r.stdout(), "228\nPfannkuchen(7) = 16\n");
    }

    #[test]
    fn test_report_rejects_unknown_fields() {
        let bad = r#"{"kernel":"fib","lines":[],"elapsed_ms":3}"#;
        assert!(serde_json::from_str::<KernelReport>(bad).is_err());
    }
}
