//! Keyword and type-name resolution.
//!
//! Identifier text is checked against the keyword table after scanning,
//! so keywords never need their own scanner states. The lookup buckets by
//! length first: the length discriminates most candidates for free, and
//! the remaining comparisons within a bucket are short fixed-size memcmps
//! the compiler handles well.
//!
//! Type names are not keywords. `integer`, `list`, and friends lex as
//! plain identifiers everywhere except directly after `as`, where the
//! lexer flags them via [`is_type_name`] so the parser can tell a type
//! annotation from a variable mention without a second lookup.

use crate::token::TokenKind;

/// Resolve identifier text to a keyword kind, if it is one.
///
/// Matching is exact and case-sensitive.
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "to" => Some(TokenKind::To),
            "as" => Some(TokenKind::As),
            "in" => Some(TokenKind::In),
            "or" => Some(TokenKind::Or),
            "is" => Some(TokenKind::Is),
            "of" => Some(TokenKind::Of),
            "by" => Some(TokenKind::By),
            _ => None,
        },
        3 => match text {
            "set" => Some(TokenKind::Set),
            "for" => Some(TokenKind::For),
            "end" => Some(TokenKind::End),
            "and" => Some(TokenKind::And),
            "not" => Some(TokenKind::Not),
            "say" => Some(TokenKind::Say),
            "ask" => Some(TokenKind::Ask),
            _ => None,
        },
        4 => match text {
            "give" => Some(TokenKind::Give),
            "call" => Some(TokenKind::Call),
            "when" => Some(TokenKind::When),
            "each" => Some(TokenKind::Each),
            "stop" => Some(TokenKind::Stop),
            "skip" => Some(TokenKind::Skip),
            "then" => Some(TokenKind::Then),
            "true" => Some(TokenKind::True),
            "with" => Some(TokenKind::With),
            "from" => Some(TokenKind::From),
            _ => None,
        },
        5 => match text {
            "until" => Some(TokenKind::Until),
            "times" => Some(TokenKind::Times),
            "while" => Some(TokenKind::While),
            "false" => Some(TokenKind::False),
            "empty" => Some(TokenKind::Empty),
            _ => None,
        },
        6 => match text {
            "change" => Some(TokenKind::Change),
            "define" => Some(TokenKind::Define),
            "action" => Some(TokenKind::Action),
            "unless" => Some(TokenKind::Unless),
            "during" => Some(TokenKind::During),
            "repeat" => Some(TokenKind::Repeat),
            _ => None,
        },
        7 => (text == "nothing").then_some(TokenKind::Nothing),
        8 => (text == "whenever").then_some(TokenKind::Whenever),
        9 => (text == "otherwise").then_some(TokenKind::Otherwise),
        10 => (text == "throughout").then_some(TokenKind::Throughout),
        _ => None,
    }
}

/// Built-in type names, recognized only in type context (after `as`).
///
/// Sorted for binary search.
const TYPE_NAMES: &[&str] = &[
    "array", "bool", "boolean", "decimal", "dict", "float", "int", "integer", "list", "number",
    "object", "record", "string", "text",
];

/// Returns `true` if `text` names a built-in type.
pub fn is_type_name(text: &str) -> bool {
    TYPE_NAMES.binary_search(&text).is_ok()
}
