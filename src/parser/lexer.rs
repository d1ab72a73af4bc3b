//! Logos-based lexer for the SysML subset
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // NAMES
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"'[^']*'")]
    UnrestrictedName,

    // =========================================================================
    // PUNCTUATION (multi-character first)
    // =========================================================================
    #[token(":>")]
    ColonGt,
    #[token("::")]
    ColonColon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("package")]
    Package,
    #[token("part")]
    Part,
    #[token("attribute")]
    Attribute,
    #[token("port")]
    Port,
    #[token("item")]
    Item,
    #[token("action")]
    Action,
    #[token("def")]
    Def,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident | UnrestrictedName => SyntaxKind::IDENT,

            ColonGt => SyntaxKind::COLON_GT,
            ColonColon => SyntaxKind::COLON_COLON,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,

            Package => SyntaxKind::PACKAGE_KW,
            Part => SyntaxKind::PART_KW,
            Attribute => SyntaxKind::ATTRIBUTE_KW,
            Port => SyntaxKind::PORT_KW,
            Item => SyntaxKind::ITEM_KW,
            Action => SyntaxKind::ACTION_KW,
            Def => SyntaxKind::DEF_KW,
        }
    }
}
