//! Expansion of species labels into scientific names to try

use std::collections::HashSet;

/// Marker stripped from synonym clauses, as in "(syn. Amanita spissa)"
const SYNONYM_MARKER: &str = "syn.";

/// Expand a species label into candidate names, in resolution order.
///
/// For a label like `"Amanita excelsa (syn. Amanita spissa)"` the name before
/// the first `(` comes first, then every `,` `/` `;` separated part of the
/// first parenthetical group, then the label itself. Only the first group is
/// parsed. Duplicates are dropped ignoring case, keeping the first spelling.
/// The result is never empty.
pub fn expand_candidates(label: &str) -> Vec<String> {
    let raw = label.trim();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    match raw.find('(') {
        Some(open) if raw.contains(')') => {
            push_unique(&mut candidates, &mut seen, raw[..open].trim());

            let rest = &raw[open + 1..];
            let inside = match rest.find(')') {
                Some(close) => &rest[..close],
                None => rest,
            };
            let cleaned = inside.replace(SYNONYM_MARKER, "");
            for part in cleaned.split(|c: char| matches!(c, ',' | '/' | ';')) {
                push_unique(&mut candidates, &mut seen, part.trim());
            }
        }
        _ => push_unique(&mut candidates, &mut seen, raw),
    }
    push_unique(&mut candidates, &mut seen, raw);

    if candidates.is_empty() {
        candidates.push(raw.to_string());
    }
    candidates
}

fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, name: &str) {
    if name.is_empty() {
        return;
    }
    if seen.insert(name.to_lowercase()) {
        out.push(name.to_string());
    }
}
