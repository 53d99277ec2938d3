use once_cell::sync::Lazy;
use regex::Regex;

// A self-closing path tag with a quoted inkscape:label anywhere among its
// attributes. `[^>]` keeps a match inside one tag but lets it span lines.
static LABELED_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<path\b[^>]*?\sinkscape:label="([^"]*)"[^>]*?/>"#)
        .expect("labeled path pattern is valid")
});

/// A labeled path tag found in the chart text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledElement<'a> {
    /// The whole tag, from `<path` to `/>`
    pub tag: &'a str,
    /// Value of the `inkscape:label` attribute
    pub label: &'a str,
    /// Byte offset of the tag in the scanned text
    pub offset: usize,
}

/// Yield every labeled, self-closing path tag in document order.
///
/// Path tags without a label are never yielded. The iterator borrows `text`
/// and makes one forward pass over it.
pub fn scan_elements(text: &str) -> impl Iterator<Item = LabeledElement<'_>> + '_ {
    LABELED_PATH.captures_iter(text).filter_map(|caps| {
        let tag = caps.get(0)?;
        let label = caps.get(1)?;
        Some(LabeledElement {
            tag: tag.as_str(),
            label: label.as_str(),
            offset: tag.start(),
        })
    })
}
