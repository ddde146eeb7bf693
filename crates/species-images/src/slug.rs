//! Filesystem-safe directory names for species

/// Lowercase `name` and join its `[a-z0-9]` runs with single underscores.
///
/// `"Amanita excelsa (Fr.) Bertill."` becomes `"amanita_excelsa_fr_bertill"`.
/// Returns an empty string when the name has no ASCII letters or digits.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
