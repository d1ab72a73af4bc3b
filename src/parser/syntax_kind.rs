//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds of the SysML subset that
//! declarations are computed over.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (packages, definitions, usages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT, // identifier or 'unrestricted name'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    SEMICOLON,   // ;
    COLON,       // :
    COLON_COLON, // ::
    COLON_GT,    // :>  (specializes)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    PACKAGE_KW,
    PART_KW,
    ATTRIBUTE_KW,
    PORT_KW,
    ITEM_KW,
    ACTION_KW,
    DEF_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    PACKAGE,
    DEFINITION,
    USAGE,
    NAME,
    TYPING,
    SPECIALIZATION,
    QUALIFIED_NAME,
    NAMESPACE_BODY,

    /// Unrecognised token, or node wrapping tokens skipped during recovery
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PACKAGE_KW as u16) && (self as u16) <= (Self::DEF_KW as u16)
    }

    /// Keywords that introduce a definition or usage (`part`, `attribute`, ...)
    pub fn is_element_keyword(self) -> bool {
        matches!(
            self,
            Self::PART_KW | Self::ATTRIBUTE_KW | Self::PORT_KW | Self::ITEM_KW | Self::ACTION_KW
        )
    }

    /// Nodes that may carry a NAME child.
    pub fn is_name_owner(self) -> bool {
        matches!(self, Self::PACKAGE | Self::DEFINITION | Self::USAGE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SysMLLanguage {}

impl rowan::Language for SysMLLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SysMLLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SysMLLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SysMLLanguage>;
