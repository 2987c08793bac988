//! Output layout options for [`Document::dump`](crate::Document::dump)

bitflags::bitflags! {
    /// Whitespace choices when serializing a document
    ///
    /// The default is the layout Aegisub writes:
    ///
    /// ```text
    /// [V4+ Styles]
    /// Format: Name, Fontname
    /// Style: Default,Arial
    /// ```
    ///
    /// `DumpFlags::empty()` writes `Format:Name,Fontname` and `Style:Default,Arial`
    /// with no blank line between sections.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DumpFlags: u8 {
        /// Space after the `:` of every `Title: body` line
        const SPACE_AFTER_COLON = 1 << 0;
        /// Space after each comma of a `Format:` line
        const SPACED_FORMAT = 1 << 1;
        /// Blank line between sections
        const SECTION_SEPARATOR = 1 << 2;
    }
}

impl Default for DumpFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl DumpFlags {
    /// Separator between a line title and its body
    #[must_use]
    pub const fn title_separator(self) -> &'static str {
        if self.contains(Self::SPACE_AFTER_COLON) {
            ": "
        } else {
            ":"
        }
    }

    /// Separator between attribute names on a `Format:` line
    #[must_use]
    pub const fn format_separator(self) -> &'static str {
        if self.contains(Self::SPACED_FORMAT) {
            ", "
        } else {
            ","
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_canonical_layout() {
        let flags = DumpFlags::default();
        assert_eq!(flags.title_separator(), ": ");
        assert_eq!(flags.format_separator(), ", ");
        assert!(flags.contains(DumpFlags::SECTION_SEPARATOR));
    }

    #[test]
    fn empty_is_compact() {
        let flags = DumpFlags::empty();
        assert_eq!(flags.title_separator(), ":");
        assert_eq!(flags.format_separator(), ",");
    }
}
