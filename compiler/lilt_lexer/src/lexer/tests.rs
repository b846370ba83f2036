use crate::{Lexer, SourceBuffer, Token, TokenKind, MAX_PEEK_OFFSET};
use pretty_assertions::assert_eq;

fn lex_all(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buf);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).iter().map(|t| t.kind).collect()
}

// === End of input ===

#[test]
fn empty_source_is_immediately_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn eof_repeats_forever() {
    let buf = SourceBuffer::new("x");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn whitespace_only_source_is_just_eof() {
    // No newline, indent, or dedent tokens for sources with no content
    assert_eq!(kinds("   \n\t\n  \n"), vec![TokenKind::Eof]);
}

// === Statements ===

#[test]
fn simple_assignment() {
    let tokens = lex_all("set count to 10\n");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Set,
            TokenKind::Ident,
            TokenKind::To,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].text_str(), Some("count"));
    assert_eq!(tokens[3].text_str(), Some("10"));
}

#[test]
fn natural_language_statement() {
    assert_eq!(
        kinds("change total to total + 1\n"),
        vec![
            TokenKind::Change,
            TokenKind::Ident,
            TokenKind::To,
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn no_newline_token_without_trailing_newline() {
    assert_eq!(kinds("say x"), vec![
        TokenKind::Say,
        TokenKind::Ident,
        TokenKind::Eof,
    ]);
}

#[test]
fn carriage_returns_are_skipped() {
    assert_eq!(
        kinds("a\r\nb"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

// === Operators and punctuation ===

#[test]
fn one_and_two_byte_operators() {
    assert_eq!(
        kinds("= == ! != < <= > >= & && | ||"),
        vec![
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::Bang,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Amp,
            TokenKind::AmpAmp,
            TokenKind::Pipe,
            TokenKind::PipePipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn arithmetic_and_punctuation() {
    assert_eq!(
        kinds("( a + b ) * [ c , d ] : ; ? { } % -"),
        vec![
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Star,
            TokenKind::LBracket,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RBracket,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Question,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Percent,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn dot_sequences() {
    assert_eq!(
        kinds("a.b a..b a...b"),
        vec![
            TokenKind::Ident,
            TokenKind::Dot,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::DotDot,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::DotDotDot,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

// === Indentation ===

#[test]
fn indent_and_dedent_around_block() {
    assert_eq!(
        kinds("when ready\n  say go\nend"),
        vec![
            TokenKind::When,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Say,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::End,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multi_level_dedent_one_token_per_call() {
    assert_eq!(
        kinds("a\n  b\n    c\nd"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn dedents_unwind_at_eof() {
    assert_eq!(
        kinds("a\n  b\n    c"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn blank_lines_emit_nothing() {
    assert_eq!(
        kinds("a\n\n\nb"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn blank_line_inside_block_keeps_the_block() {
    assert_eq!(
        kinds("a\n  b\n\n  c\n"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tab_indents_four_columns() {
    // A tab and four spaces are the same depth
    assert_eq!(
        kinds("a\n\tb\n    c\n"),
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn indent_depth_tracks_nesting() {
    let buf = SourceBuffer::new("a\n  b\n");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.indent_depth(), 0);
    lexer.next_token(); // a
    lexer.next_token(); // newline
    lexer.next_token(); // indent
    assert_eq!(lexer.indent_depth(), 1);
}

#[test]
fn indents_and_dedents_always_balance() {
    for source in [
        "a\n  b\n    c\n  d\ne",
        "a\n\tb\nc",
        "a\n  b",
        "x\n        y",
        "a\n  b\n      c\n  d",
    ] {
        let produced = kinds(source);
        let indents = produced.iter().filter(|k| **k == TokenKind::Indent).count();
        let dedents = produced.iter().filter(|k| **k == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced for {source:?}");
    }
}

// === Lookahead ===

#[test]
fn peek_does_not_consume() {
    let buf = SourceBuffer::new("set x to 42 + y\n");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.peek(0).map(|t| t.kind), Some(TokenKind::Set));
    assert_eq!(
        lexer.peek(1).and_then(|t| t.text_str().map(str::to_owned)),
        Some("x".to_owned())
    );
    assert_eq!(lexer.peek(3).map(|t| t.kind), Some(TokenKind::Number));

    // The stream is untouched
    assert_eq!(lexer.next_token().kind, TokenKind::Set);
    assert_eq!(lexer.next_token().text_str(), Some("x"));
}

#[test]
fn peek_matches_later_stream() {
    let source = "when a\n  say \"hi\"\nend\n";
    let buf = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buf);

    let mut peeked = Vec::new();
    for offset in 0..8 {
        let Some(token) = lexer.peek(offset) else {
            panic!("peek {offset} within bounds");
        };
        peeked.push(token);
    }
    let streamed: Vec<_> = (0..8).map(|_| lexer.next_token()).collect();
    assert_eq!(peeked, streamed);
}

#[test]
fn peek_at_bound_is_rejected() {
    let buf = SourceBuffer::new("a b c\n");
    let mut lexer = Lexer::new(&buf);
    assert!(lexer.peek(MAX_PEEK_OFFSET - 1).is_some());
    assert!(lexer.peek(MAX_PEEK_OFFSET).is_none());
    assert!(lexer.peek(MAX_PEEK_OFFSET + 10).is_none());
}

#[test]
fn peek_past_eof_returns_eof() {
    let buf = SourceBuffer::new("x");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.peek(5).map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn peek_across_indentation_restores_the_stack() {
    let source = "a\n  b\nc\n";
    let buf = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buf);

    // Peek deep enough to cross the indent and the dedent
    for offset in 0..7 {
        let _ = lexer.peek(offset);
    }
    // The real stream still sees every structural token in order
    let streamed: Vec<_> = std::iter::from_fn(|| {
        let t = lexer.next_token();
        (t.kind != TokenKind::Eof).then_some(t.kind)
    })
    .collect();
    assert_eq!(
        streamed,
        vec![
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Ident,
            TokenKind::Newline,
        ]
    );
}

// === Type context ===

#[test]
fn as_keyword_opens_type_context() {
    let buf = SourceBuffer::new("set x as integer\n");
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // set
    lexer.next_token(); // x
    assert!(!lexer.in_type_context());
    assert_eq!(lexer.next_token().kind, TokenKind::As);
    assert!(lexer.in_type_context());

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text_str(), Some("integer"));
    assert!(!lexer.in_type_context(), "identifier closes the context");
    assert!(lexer.last_ident_was_type_name());
}

#[test]
fn type_names_are_plain_identifiers_outside_type_context() {
    let buf = SourceBuffer::new("set integer to 5\n");
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // set
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert!(!lexer.last_ident_was_type_name());
}

#[test]
fn non_type_identifier_in_type_context() {
    let buf = SourceBuffer::new("x as widget\n");
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // x
    lexer.next_token(); // as
    let token = lexer.next_token();
    assert_eq!(token.text_str(), Some("widget"));
    assert!(!lexer.last_ident_was_type_name());
    assert!(!lexer.in_type_context());
}

#[test]
fn keyword_closes_type_context() {
    let buf = SourceBuffer::new("as when\n");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.next_token().kind, TokenKind::As);
    assert!(lexer.in_type_context());
    assert_eq!(lexer.next_token().kind, TokenKind::When);
    assert!(!lexer.in_type_context());
}

#[test]
fn operators_leave_type_context_open() {
    let buf = SourceBuffer::new("as ( integer\n");
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // as
    assert_eq!(lexer.next_token().kind, TokenKind::LParen);
    assert!(lexer.in_type_context());
    lexer.next_token(); // integer
    assert!(lexer.last_ident_was_type_name());
}

#[test]
fn punctuation_and_newline_do_not_merge() {
    assert_eq!(
        kinds("(),\n"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_prefix_is_a_plain_identifier() {
    let tokens = lex_all("setx");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text_str(), Some("setx"));
}

// === Error recovery ===

#[test]
fn recovery_skips_to_next_line_and_continues() {
    let source = format!("{}\nsay x\n", "1".repeat(100));
    let buf = SourceBuffer::new(&source);
    let mut lexer = Lexer::new(&buf);

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Newline);
    assert!(lexer.in_error_recovery());

    assert_eq!(lexer.next_token().kind, TokenKind::Say);
    assert_eq!(lexer.next_token().text_str(), Some("x"));
}

#[test]
fn caller_reported_errors_resynchronize() {
    let buf = SourceBuffer::new("bad rest of line\nsay x\n");
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // bad
    lexer.enter_error_recovery("unexpected token");
    assert!(lexer.in_error_recovery());

    // The rest of the line is skipped; lexing resumes at the boundary
    assert_eq!(lexer.next_token().kind, TokenKind::Newline);
    assert_eq!(lexer.next_token().kind, TokenKind::Say);
    let err = lexer.clear_error().unwrap();
    assert_eq!(err.message, "unexpected token");
}

#[test]
fn clear_error_returns_the_record() {
    let source = format!("{}\n", "1".repeat(100));
    let buf = SourceBuffer::new(&source);
    let mut lexer = Lexer::new(&buf);
    lexer.next_token();

    let err = lexer.clear_error().unwrap();
    assert_eq!(err.location.line, 1);
    assert!(err.message.contains("numeric literal"));
    assert!(!lexer.in_error_recovery());
    assert!(lexer.clear_error().is_none());
}

#[test]
fn error_location_points_into_the_offending_line() {
    let source = format!("say x\n{}\n", "2".repeat(100));
    let buf = SourceBuffer::new(&source);
    let mut lexer = Lexer::new(&buf);
    lexer.next_token(); // say
    lexer.next_token(); // x
    lexer.next_token(); // newline
    lexer.next_token(); // newline after the rejected literal

    let err = lexer.clear_error().unwrap();
    assert_eq!(err.location.line, 2);
}

// === Bookkeeping ===

#[test]
fn last_token_kind_follows_the_stream() {
    let buf = SourceBuffer::new("set x\n");
    let mut lexer = Lexer::new(&buf);
    assert_eq!(lexer.last_token_kind(), None);
    lexer.next_token();
    assert_eq!(lexer.last_token_kind(), Some(TokenKind::Set));
    lexer.next_token();
    assert_eq!(lexer.last_token_kind(), Some(TokenKind::Ident));
}

#[test]
fn location_advances_with_the_cursor() {
    let buf = SourceBuffer::new("ab\ncd");
    let mut lexer = Lexer::new(&buf);
    let start = lexer.location();
    assert_eq!((start.line, start.column, start.offset), (1, 1, 0));

    lexer.next_token(); // ab
    lexer.next_token(); // newline
    let after = lexer.location();
    assert_eq!((after.line, after.column), (2, 1));
    assert_eq!(after.offset, 3);
}

// === Full programs ===

#[test]
fn small_program_end_to_end() {
    let source = concat!(
        "define action greet with name\n",
        "  say \"hello\"\n",
        "  give name\n",
        "\n",
        "call greet with \"world\"\n",
    );
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Define,
            TokenKind::Action,
            TokenKind::Ident,
            TokenKind::With,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Say,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Give,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Call,
            TokenKind::Ident,
            TokenKind::With,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn conditional_with_otherwise() {
    assert_eq!(
        kinds("when x is 5\n  say \"five\"\notherwise\n  say \"other\"\n"),
        vec![
            TokenKind::When,
            TokenKind::Ident,
            TokenKind::Is,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Say,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Otherwise,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Say,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lexer {
    use crate::{Lexer, SourceBuffer, TokenKind};
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let buf = SourceBuffer::new(source);
        let mut lexer = Lexer::new(&buf);
        let mut kinds = Vec::new();
        loop {
            let kind = lexer.next_token().kind;
            kinds.push(kind);
            if kind == TokenKind::Eof {
                break;
            }
        }
        kinds
    }

    proptest! {
        /// Indent and dedent tokens balance over any complete run.
        #[test]
        fn indentation_always_balances(
            lines in proptest::collection::vec(
                (0usize..12, "[a-z]{1,6}"),
                0..24,
            ),
        ) {
            let source: String = lines
                .iter()
                .map(|(width, word)| format!("{}{word}\n", " ".repeat(*width)))
                .collect();
            let produced = kinds(&source);
            let indents = produced.iter().filter(|k| **k == TokenKind::Indent).count();
            let dedents = produced.iter().filter(|k| **k == TokenKind::Dedent).count();
            prop_assert_eq!(indents, dedents);
        }

        /// Lexing always terminates with Eof and never loops, whatever
        /// bytes appear in the source.
        #[test]
        fn arbitrary_text_terminates(source in "[ -~\n\tд日π]{0,200}") {
            let produced = kinds(&source);
            prop_assert_eq!(produced.last(), Some(&TokenKind::Eof));
        }

        /// Peeking the next token never changes what the stream returns.
        #[test]
        fn peek_is_transparent(source in "[a-z0-9 .\n\"]{0,80}") {
            let buf = SourceBuffer::new(&source);
            let mut lexer = Lexer::new(&buf);
            loop {
                let peeked = lexer.peek(0);
                prop_assert!(peeked.is_some());
                let streamed = lexer.next_token();
                prop_assert_eq!(peeked.as_ref(), Some(&streamed));
                if streamed.kind == TokenKind::Eof {
                    break;
                }
            }
        }
    }
}
