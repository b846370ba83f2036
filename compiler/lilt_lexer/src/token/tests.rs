use super::*;
use pretty_assertions::assert_eq;

#[test]
fn spelled_tokens_carry_static_text() {
    let token = Token::spelled(TokenKind::Set);
    assert_eq!(token.kind, TokenKind::Set);
    assert_eq!(token.text, Some(TokenText::Static("set")));
    assert_eq!(token.text_str(), Some("set"));
}

#[test]
fn newline_spells_line_feed() {
    let token = Token::spelled(TokenKind::Newline);
    assert_eq!(token.text_str(), Some("\n"));
}

#[test]
fn indent_tokens_spell_empty() {
    assert_eq!(Token::spelled(TokenKind::Indent).text_str(), Some(""));
    assert_eq!(Token::spelled(TokenKind::Dedent).text_str(), Some(""));
}

#[test]
fn eof_has_no_text() {
    let token = Token::eof();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.text, None);
    assert_eq!(token.text_str(), None);
}

#[test]
fn literal_constructors_own_their_text() {
    let ident = Token::ident("total-count".to_owned());
    assert_eq!(ident.kind, TokenKind::Ident);
    assert_eq!(ident.text, Some(TokenText::Owned("total-count".to_owned())));

    let number = Token::number("1_000.5".to_owned());
    assert_eq!(number.kind, TokenKind::Number);
    assert_eq!(number.text_str(), Some("1_000.5"));

    let string = Token::string("hello\nworld".to_owned());
    assert_eq!(string.kind, TokenKind::Str);
    assert_eq!(string.text_str(), Some("hello\nworld"));
}

#[test]
fn static_text_for_operators() {
    assert_eq!(TokenKind::Plus.static_text(), Some("+"));
    assert_eq!(TokenKind::EqEq.static_text(), Some("=="));
    assert_eq!(TokenKind::DotDotDot.static_text(), Some("..."));
    assert_eq!(TokenKind::Question.static_text(), Some("?"));
}

#[test]
fn static_text_absent_for_literal_kinds() {
    assert_eq!(TokenKind::Ident.static_text(), None);
    assert_eq!(TokenKind::Number.static_text(), None);
    assert_eq!(TokenKind::Str.static_text(), None);
    assert_eq!(TokenKind::Eof.static_text(), None);
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::Set.is_keyword());
    assert!(TokenKind::Throughout.is_keyword());
    assert!(TokenKind::By.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Plus.is_keyword());
    assert!(!TokenKind::Newline.is_keyword());
}

#[test]
fn keyword_spellings_match_kind_names() {
    // Spot checks on the longest and shortest keywords
    assert_eq!(TokenKind::Throughout.static_text(), Some("throughout"));
    assert_eq!(TokenKind::To.static_text(), Some("to"));
    assert_eq!(TokenKind::Whenever.static_text(), Some("whenever"));
    assert_eq!(TokenKind::Otherwise.static_text(), Some("otherwise"));
}
