//! The output value type of the segmentation pass.

/// One retrievable, independently citable unit of document text.
///
/// Sections are immutable once emitted and compare structurally, so callers
/// can rely on value semantics (ordering and idempotence checks in tests,
/// hand-off to the indexing layer by value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Dotted-decimal identifier, e.g. `"4.1.2"`.
    pub number: String,
    /// Title inherited from the nearest preceding heading whose number
    /// prefix covers this section, if any.
    pub title: Option<String>,
    /// Body text: first content line plus continuation lines, joined with
    /// line breaks. Never empty.
    pub body: String,
}

impl Section {
    /// Citation label under which this section is indexed, e.g. `"Law 4.1.2"`.
    pub fn label(&self) -> String {
        format!("Law {}", self.number)
    }
}
