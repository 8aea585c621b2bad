use crate::model::CatalogRecord;

/// Derives a URL-safe slug from a human-readable title: lowercase, every run
/// of characters outside `[a-z0-9]` collapsed to a single hyphen, leading and
/// trailing hyphens stripped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Explicit slug when the caller supplied a non-empty one, derived otherwise.
pub fn resolve_slug(explicit: Option<String>, title: &str) -> String {
    match explicit {
        Some(slug) if !slug.is_empty() => slug,
        _ => slugify(title),
    }
}

pub fn slug_taken<E: CatalogRecord>(records: &[E], slug: &str) -> bool {
    records.iter().any(|r| r.slug() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Air Max"), "air-max");
    }

    #[test]
    fn slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  --Running / Shoes!!  "), "running-shoes");
        assert_eq!(slugify("Model 90 (2024 Edition)"), "model-90-2024-edition");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        // Accented characters are outside [a-z0-9] and become separators.
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn slugify_empty_and_symbol_only_titles() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn resolve_slug_prefers_non_empty_explicit() {
        assert_eq!(
            resolve_slug(Some("custom-slug".to_string()), "Air Max"),
            "custom-slug"
        );
        assert_eq!(resolve_slug(Some(String::new()), "Air Max"), "air-max");
        assert_eq!(resolve_slug(None, "Air Max"), "air-max");
    }
}
