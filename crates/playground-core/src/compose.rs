//! Preview composition.
//!
//! Merges the three surface snapshots into one synthetic document. There is
//! no diffing and no incremental patching: every rebuild replaces the whole
//! document, so the viewer never observes a partial mixture of old and new
//! text. Buffer content is embedded verbatim; malformed input flows through
//! untouched and any failure belongs to whatever renders the document.

/// Build the composed document from the three surface snapshots.
///
/// The style text lands inside the head's `<style>` block, the markup inside
/// the body, and the script inside the trailing `<script>` block.
pub fn compose(markup: &str, style: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><style>{style}</style></head>\n\
         <body>{markup}<script>{script}</script></body>\n\
         </html>\n"
    )
}

/// The current composed document plus a rebuild counter.
///
/// `generation` starts at zero for an empty document and bumps on every
/// [`PreviewDocument::rebuild`], letting callers detect replacement without
/// comparing text.
#[derive(Debug, Clone, Default)]
pub struct PreviewDocument {
    text: String,
    generation: u64,
}

impl PreviewDocument {
    /// An empty document that has never been composed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document with a fresh composition of the given snapshots.
    pub fn rebuild(&mut self, markup: &str, style: &str, script: &str) {
        self.text = compose(markup, style, script);
        self.generation += 1;
    }

    /// The composed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the document has been rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
