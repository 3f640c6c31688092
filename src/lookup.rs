/// Key-value lookup over a flat entry list.
///
/// Search is a linear scan with exact byte equality. There is no hash
/// index; the scan cost is what the kernel measures.

use tracing::debug;

/// Number of entries built by the suite.
pub const DEFAULT_COUNT: usize = 10_000;

/// Key searched by the suite: the last one, so the scan visits every entry.
pub const DEFAULT_TARGET: &str = "key_9999";

/// One key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Build `count` entries `key_<i>` -> `value_<i>` in index order.
pub fn build_entries(count: usize) -> Vec<Entry> {
    let entries: Vec<Entry> = (0..count)
        .map(|i| Entry {
            key: format!("key_{}", i),
            value: format!("value_{}", i),
        })
        .collect();
    debug!(count = entries.len(), "lookup entries built");
    entries
}

/// Linear scan for `target`. Returns the first matching value.
pub fn find_entry<'a>(entries: &'a [Entry], target: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.key.as_bytes() == target.as_bytes())
        .map(|e| e.value.as_str())
}

/// Report lines; an absent key prints an empty value.
pub fn report_lines(found: Option<&str>, count: usize) -> Vec<String> {
    vec![
        format!("Found: {}", found.unwrap_or("")),
        format!("Count: {}", count),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order() {
        let entries = build_entries(3);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key, "key_0");
        assert_eq!(entries[2].value, "value_2");
    }

    #[test]
    fn test_find_last_key() {
        let entries = build_entries(DEFAULT_COUNT);
        assert_eq!(find_entry(&entries, DEFAULT_TARGET), Some("value_9999"));
    }

    #[test]
    fn test_find_absent_key() {
        let entries = build_entries(DEFAULT_COUNT);
        assert_eq!(find_entry(&entries, "key_10000"), None);
        // Prefix of a real key is not a match.
        assert_eq!(find_entry(&entries, "key_"), None);
        assert_eq!(report_lines(None, 0), vec!["Found: ", "Count: 0"]);
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(find_entry(&[], "key_0"), None);
    }
}
