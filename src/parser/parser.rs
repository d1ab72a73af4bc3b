//! Recursive descent parser for the SysML subset
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    parser.parse_source_file();
    let parse = parser.finish();
    if !parse.ok() {
        tracing::trace!(errors = parse.errors.len(), "parsed with recovered errors");
    }
    parse
}

/// Tokens that may start a namespace member; used as recovery points.
const MEMBER_START: &[SyntaxKind] = &[
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::PART_KW,
    SyntaxKind::ATTRIBUTE_KW,
    SyntaxKind::PORT_KW,
    SyntaxKind::ITEM_KW,
    SyntaxKind::ACTION_KW,
    SyntaxKind::R_BRACE,
];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = NamespaceMember*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            if self.at(SyntaxKind::R_BRACE) {
                self.error("unmatched '}'");
                self.start_node(SyntaxKind::ERROR);
                self.bump();
                self.finish_node();
                continue;
            }
            self.parse_namespace_member();
        }

        self.finish_node();
    }

    /// NamespaceMember = Package | DefinitionOrUsage
    fn parse_namespace_member(&mut self) {
        match self.current_kind() {
            SyntaxKind::PACKAGE_KW => self.parse_package(),
            kind if kind.is_element_keyword() => self.parse_definition_or_usage(),
            kind => {
                self.error_recover(format!("unexpected token: {:?}", kind), MEMBER_START);
            }
        }
    }

    /// Package = 'package' Name? NamespaceBody
    fn parse_package(&mut self) {
        self.start_node(SyntaxKind::PACKAGE);

        self.expect(SyntaxKind::PACKAGE_KW);
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
            self.skip_trivia();
        }
        self.parse_body();

        self.finish_node();
    }

    /// DefinitionOrUsage = Keyword 'def'? Name? Relationship* NamespaceBody
    ///
    /// The `def` keyword decides between DEFINITION and USAGE, so the node is
    /// opened retroactively from a checkpoint.
    fn parse_definition_or_usage(&mut self) {
        let checkpoint = self.builder.checkpoint();

        self.bump(); // element keyword
        self.skip_trivia();
        let kind = if self.eat(SyntaxKind::DEF_KW) {
            self.skip_trivia();
            SyntaxKind::DEFINITION
        } else {
            SyntaxKind::USAGE
        };
        self.builder.start_node_at(checkpoint, kind.into());

        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
            self.skip_trivia();
        }

        loop {
            match self.current_kind() {
                SyntaxKind::COLON => self.parse_relationship(SyntaxKind::TYPING),
                SyntaxKind::COLON_GT => self.parse_relationship(SyntaxKind::SPECIALIZATION),
                _ => break,
            }
            self.skip_trivia();
        }

        self.parse_body();

        self.finish_node();
    }

    /// Name = IDENT
    fn parse_name(&mut self) {
        self.start_node(SyntaxKind::NAME);
        self.bump();
        self.finish_node();
    }

    /// Relationship = (':' | ':>') QualifiedName
    fn parse_relationship(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.parse_qualified_name();
        } else {
            self.error("expected type name");
        }
        self.finish_node();
    }

    /// QualifiedName = IDENT ('::' IDENT)*
    fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QUALIFIED_NAME);
        self.bump();
        while self.eat(SyntaxKind::COLON_COLON) {
            self.expect(SyntaxKind::IDENT);
        }
        self.finish_node();
    }

    /// NamespaceBody = ';' | '{' NamespaceMember* '}'
    fn parse_body(&mut self) {
        if self.at(SyntaxKind::SEMICOLON) {
            self.bump();
            return;
        }
        if !self.at(SyntaxKind::L_BRACE) {
            self.error("expected ';' or '{'");
            return;
        }

        self.start_node(SyntaxKind::NAMESPACE_BODY);
        self.bump();
        loop {
            self.skip_trivia();
            if self.at_eof() {
                self.error("expected '}'");
                break;
            }
            if self.eat(SyntaxKind::R_BRACE) {
                break;
            }
            self.parse_namespace_member();
        }
        self.finish_node();
    }
}
