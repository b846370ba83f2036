//! Token model for the Lilt lexer.
//!
//! [`TokenKind`] is one closed enum covering synthetic tokens (`Eof`,
//! `Newline`, `Indent`, `Dedent`), the three text-carrying literal kinds
//! (`Ident`, `Number`, `Str`), every keyword, and every operator and
//! punctuation mark. Kinds carry no data; the text rides on the [`Token`]
//! so that kinds stay `Copy` and cheap to compare.
//!
//! Token text comes in two flavors, [`TokenText`]: operators, punctuation,
//! and keywords point at their canonical static spelling, while `Ident`,
//! `Number`, and `Str` tokens own freshly allocated text. Every token has
//! text except `Eof`.

/// The kind of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Synthetic
    /// End of input. The only kind whose token carries no text.
    Eof,
    /// End of a logical line that contained content.
    Newline,
    /// Start of a nested indentation block.
    Indent,
    /// End of a nested indentation block.
    Dedent,

    // Literals (always own their text)
    /// Identifier.
    Ident,
    /// Numeric literal; text preserves the source spelling, including
    /// underscores and exponent.
    Number,
    /// String literal; text holds the escape-resolved contents.
    Str,

    // Keywords
    Set,
    Change,
    To,
    As,
    Define,
    Action,
    Give,
    Call,
    When,
    Unless,
    Whenever,
    Until,
    During,
    Throughout,
    Otherwise,
    Repeat,
    Times,
    While,
    For,
    Each,
    In,
    Stop,
    Skip,
    Then,
    End,
    And,
    Or,
    Not,
    Is,
    True,
    False,
    Nothing,
    Empty,
    Say,
    Ask,
    With,
    Of,
    From,
    By,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    EqEq,
    Bang,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Dot,
    DotDot,
    DotDotDot,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Question,
}

impl TokenKind {
    /// Canonical spelling for kinds that have one.
    ///
    /// Keywords, operators, and punctuation spell themselves; `Newline`
    /// spells `"\n"` and the indentation tokens spell the empty string.
    /// The text-carrying kinds (`Ident`, `Number`, `Str`) and `Eof` have
    /// no fixed spelling and return `None`.
    pub fn static_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Eof | TokenKind::Ident | TokenKind::Number | TokenKind::Str => None,
            TokenKind::Newline => Some("\n"),
            TokenKind::Indent | TokenKind::Dedent => Some(""),

            TokenKind::Set => Some("set"),
            TokenKind::Change => Some("change"),
            TokenKind::To => Some("to"),
            TokenKind::As => Some("as"),
            TokenKind::Define => Some("define"),
            TokenKind::Action => Some("action"),
            TokenKind::Give => Some("give"),
            TokenKind::Call => Some("call"),
            TokenKind::When => Some("when"),
            TokenKind::Unless => Some("unless"),
            TokenKind::Whenever => Some("whenever"),
            TokenKind::Until => Some("until"),
            TokenKind::During => Some("during"),
            TokenKind::Throughout => Some("throughout"),
            TokenKind::Otherwise => Some("otherwise"),
            TokenKind::Repeat => Some("repeat"),
            TokenKind::Times => Some("times"),
            TokenKind::While => Some("while"),
            TokenKind::For => Some("for"),
            TokenKind::Each => Some("each"),
            TokenKind::In => Some("in"),
            TokenKind::Stop => Some("stop"),
            TokenKind::Skip => Some("skip"),
            TokenKind::Then => Some("then"),
            TokenKind::End => Some("end"),
            TokenKind::And => Some("and"),
            TokenKind::Or => Some("or"),
            TokenKind::Not => Some("not"),
            TokenKind::Is => Some("is"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Nothing => Some("nothing"),
            TokenKind::Empty => Some("empty"),
            TokenKind::Say => Some("say"),
            TokenKind::Ask => Some("ask"),
            TokenKind::With => Some("with"),
            TokenKind::Of => Some("of"),
            TokenKind::From => Some("from"),
            TokenKind::By => Some("by"),

            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Eq => Some("="),
            TokenKind::EqEq => Some("=="),
            TokenKind::Bang => Some("!"),
            TokenKind::NotEq => Some("!="),
            TokenKind::Lt => Some("<"),
            TokenKind::LtEq => Some("<="),
            TokenKind::Gt => Some(">"),
            TokenKind::GtEq => Some(">="),
            TokenKind::Amp => Some("&"),
            TokenKind::AmpAmp => Some("&&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::PipePipe => Some("||"),
            TokenKind::Dot => Some("."),
            TokenKind::DotDot => Some(".."),
            TokenKind::DotDotDot => Some("..."),

            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBracket => Some("["),
            TokenKind::RBracket => Some("]"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Question => Some("?"),
        }
    }

    /// Returns `true` for keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Set
                | TokenKind::Change
                | TokenKind::To
                | TokenKind::As
                | TokenKind::Define
                | TokenKind::Action
                | TokenKind::Give
                | TokenKind::Call
                | TokenKind::When
                | TokenKind::Unless
                | TokenKind::Whenever
                | TokenKind::Until
                | TokenKind::During
                | TokenKind::Throughout
                | TokenKind::Otherwise
                | TokenKind::Repeat
                | TokenKind::Times
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Each
                | TokenKind::In
                | TokenKind::Stop
                | TokenKind::Skip
                | TokenKind::Then
                | TokenKind::End
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Is
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nothing
                | TokenKind::Empty
                | TokenKind::Say
                | TokenKind::Ask
                | TokenKind::With
                | TokenKind::Of
                | TokenKind::From
                | TokenKind::By
        )
    }
}

/// Token text: either a canonical static spelling or owned heap text.
///
/// The split mirrors the ownership question a consumer cares about when
/// releasing tokens: static spellings are borrowed forever, owned text
/// drops with the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenText {
    /// Canonical spelling of an operator, punctuation mark, or keyword.
    Static(&'static str),
    /// Freshly allocated text of an `Ident`, `Number`, or `Str` token.
    Owned(String),
}

impl TokenText {
    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            TokenText::Static(s) => s,
            TokenText::Owned(s) => s.as_str(),
        }
    }
}

/// An immutable lexed token: a kind plus optional text.
///
/// # Invariant
///
/// `text` is `Some` for every kind except [`TokenKind::Eof`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// The token's text; `None` only for `Eof`.
    pub text: Option<TokenText>,
}

impl Token {
    /// Token for a kind with a canonical spelling (keyword, operator,
    /// punctuation, or synthetic).
    pub(crate) fn spelled(kind: TokenKind) -> Self {
        debug_assert!(
            kind.static_text().is_some(),
            "{kind:?} has no canonical spelling"
        );
        Self {
            kind,
            text: kind.static_text().map(TokenText::Static),
        }
    }

    /// Identifier token owning its text.
    pub(crate) fn ident(text: String) -> Self {
        Self {
            kind: TokenKind::Ident,
            text: Some(TokenText::Owned(text)),
        }
    }

    /// Numeric token owning its display text.
    pub(crate) fn number(text: String) -> Self {
        Self {
            kind: TokenKind::Number,
            text: Some(TokenText::Owned(text)),
        }
    }

    /// String token owning its escape-resolved contents.
    pub(crate) fn string(text: String) -> Self {
        Self {
            kind: TokenKind::Str,
            text: Some(TokenText::Owned(text)),
        }
    }

    /// End-of-input token.
    pub(crate) fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: None,
        }
    }

    /// The token's text as a string slice, if it has any.
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_ref().map(TokenText::as_str)
    }
}

#[cfg(test)]
mod tests;
