//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '~' },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedCharacter { character: '~' });
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(4, 2));

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_unexpected_character_message_has_code_point_and_glyph() {
    let error = ErrorImpl::UnexpectedCharacter { character: '~' };
    assert_eq!(error.to_string(), "error: (126) '~'");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '~' },
        Position::new(3, 7),
    );

    assert_eq!(error.to_string(), "error: (126) '~' in line 3, pos 7");
}

#[test]
fn test_expected_follow_error() {
    let error = Error::new(
        ErrorImpl::ExpectedFollow { operator: '|', expected: '|', found: Some('x') },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "ExpectedFollow");
    assert_eq!(error.get_tip().to_string(), "expected `||`, found `|` followed by `x`");
}

#[test]
fn test_expected_follow_at_end_of_input() {
    let error = Error::new(
        ErrorImpl::ExpectedFollow { operator: '&', expected: '&', found: None },
        Position::new(1, 1),
    );

    assert_eq!(error.get_tip().to_string(), "expected `&&`, found `&` at end of input");
}

#[test]
fn test_unterminated_errors() {
    let string = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 1));
    let comment = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 1));

    assert_eq!(string.get_error_name(), "UnterminatedString");
    assert_eq!(comment.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_is_internal_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 1));
    let source = std::error::Error::source(&error).map(|e| e.to_string());

    assert_eq!(source.as_deref(), Some("error: unterminated string literal"));
}
