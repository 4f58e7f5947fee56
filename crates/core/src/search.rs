//! Case-insensitive matching for the gallery filters.
//!
//! Category, region and free-text search all fold through [`fold`] so the
//! in-memory and SQL backings agree on what "matches" means. The SQL side
//! compares `LOWER(column)` against an already-folded needle.

/// Fold a string to its canonical comparison form.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive exact match.
pub fn equals_folded(value: &str, folded_needle: &str) -> bool {
    fold(value) == folded_needle
}

/// Case-insensitive substring match.
pub fn contains_folded(value: &str, folded_needle: &str) -> bool {
    fold(value).contains(folded_needle)
}

/// The one gallery filter applied to a list request.
///
/// Only a single filter is ever applied; see [`GalleryFilter::from_params`]
/// for the precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryFilter {
    /// Substring over title, category, description and region.
    Search(String),
    /// Exact category.
    Category(String),
    /// Exact region.
    Region(String),
    /// No filter.
    All,
}

impl GalleryFilter {
    /// Pick the filter from the raw query parameters.
    ///
    /// Precedence is `search` > `category` > `region` > everything. Empty
    /// values count as absent.
    pub fn from_params(
        search: Option<&str>,
        category: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(query) = present(search) {
            GalleryFilter::Search(query)
        } else if let Some(category) = present(category) {
            GalleryFilter::Category(category)
        } else if let Some(region) = present(region) {
            GalleryFilter::Region(region)
        } else {
            GalleryFilter::All
        }
    }
}
