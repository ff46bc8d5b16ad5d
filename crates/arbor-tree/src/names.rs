//! Name snapshots of tree levels, for diagnostics.

use crate::entry::{Entry, WorkspaceEntry};

/// Names of `entries`, in order.
pub fn entry_names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

/// Names targeted by `changes`, in order.
pub fn workspace_names(changes: &[WorkspaceEntry]) -> Vec<String> {
    changes.iter().map(|c| c.name().to_string()).collect()
}

/// Render names as a JSON array, or `"unknown"` if encoding fails.
pub fn pretty_names(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_types::ObjectId;

    #[test]
    fn snapshots_keep_order() {
        let entries = vec![
            Entry::object("a.txt", ObjectId::null()),
            Entry::tree("docs", ObjectId::null()),
        ];
        assert_eq!(entry_names(&entries), vec!["a.txt", "docs"]);

        let changes = vec![
            WorkspaceEntry::tombstone(Entry::object("b.txt", ObjectId::null())),
            WorkspaceEntry::upsert(Entry::tree("src", ObjectId::null())),
        ];
        assert_eq!(workspace_names(&changes), vec!["b.txt", "src"]);
    }

    #[test]
    fn pretty_names_is_json() {
        let names = vec!["a".to_string(), "say \"hi\"".to_string()];
        assert_eq!(pretty_names(&names), r#"["a","say \"hi\""]"#);
        assert_eq!(pretty_names(&[]), "[]");
    }
}
