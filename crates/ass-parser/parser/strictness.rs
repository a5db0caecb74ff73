//! Strictness flags controlling which malformed input is tolerated

bitflags::bitflags! {
    /// Independent toggles turning would-be fatal parser conditions into skips
    ///
    /// Flags combine freely. [`Strictness::STRICT`] tolerates nothing and is
    /// the default; [`Strictness::NONE`] tolerates everything.
    ///
    /// ```rust
    /// use ass_parser::Strictness;
    ///
    /// let lenient = Strictness::ALLOW_UNKNOWN_SECTIONS | Strictness::ALLOW_INVALID_LINES;
    /// assert!(!lenient.contains(Strictness::ALLOW_INVALID_SECTIONS));
    /// assert_eq!(Strictness::default(), Strictness::STRICT);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Strictness: u8 {
        /// Keep sections outside the known and pass-through sets as raw text
        const ALLOW_UNKNOWN_SECTIONS = 1 << 0;
        /// Skip top-level lines that are not `[Section]` headers
        const ALLOW_INVALID_SECTIONS = 1 << 1;
        /// Skip malformed or unrecognized lines and columns inside sections
        const ALLOW_INVALID_LINES = 1 << 2;
    }
}

impl Strictness {
    /// Every malformed construct is an error
    pub const STRICT: Self = Self::empty();

    /// Every flag set
    pub const NONE: Self = Self::all();

    pub(crate) const fn unknown_sections(self) -> bool {
        self.contains(Self::ALLOW_UNKNOWN_SECTIONS)
    }

    pub(crate) const fn invalid_sections(self) -> bool {
        self.contains(Self::ALLOW_INVALID_SECTIONS)
    }

    pub(crate) const fn invalid_lines(self) -> bool {
        self.contains(Self::ALLOW_INVALID_LINES)
    }
}

impl Default for Strictness {
    fn default() -> Self {
        Self::STRICT
    }
}
