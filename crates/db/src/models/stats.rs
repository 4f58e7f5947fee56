//! Aggregate counts across the three collections.

use serde::Serialize;

/// Response body for `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageStats {
    pub total_pillars: usize,
    pub total_timeline_eras: usize,
    pub total_gallery_items: usize,
    /// Distinct categories in display order of first appearance.
    pub gallery_categories: Vec<String>,
    /// Distinct non-null regions in display order of first appearance.
    pub regions: Vec<String>,
}
