//! Shared lookup tables for renderer tests.

use dtp_ir::{Frame, FrameId, Literal, Mappings, Token, TokenDefinition, TokenId, WordId};

pub const OPEN: WordId = WordId::new(1);
pub const DRAIN: WordId = WordId::new(2);
pub const INPUT: WordId = WordId::new(3);
pub const SET: WordId = WordId::new(4);
pub const PIN: WordId = WordId::new(5);
pub const HIGH: WordId = WordId::new(6);
pub const WHEN: WordId = WordId::new(7);
pub const IS: WordId = WordId::new(8);
pub const COMMA: WordId = WordId::new(9);
pub const THE: WordId = WordId::new(10);
pub const UNTIL: WordId = WordId::new(11);
pub const LOW: WordId = WordId::new(12);

/// Search-tree key of the literal token `when`.
pub const WHEN_TOKEN: TokenId = TokenId::new(20);
/// Search-tree key of a non-literal (register name) token.
pub const REGISTER_TOKEN: TokenId = TokenId::new(21);
/// Search-tree key of the literal token `is`.
pub const IS_TOKEN: TokenId = TokenId::new(22);

/// Frame definition with three literal slots.
pub const SET_FRAME: FrameId = FrameId::new(100);
/// Frame definition with four literal slots.
pub const WHEN_FRAME: FrameId = FrameId::new(101);
/// Frame definition with two literal slots.
pub const STATE_FRAME: FrameId = FrameId::new(102);

/// Word id no table knows.
pub const UNKNOWN_WORD: WordId = WordId::new(999);

pub fn mappings() -> Mappings {
    Mappings::new()
        .with_word(OPEN, "open")
        .with_word(DRAIN, "drain")
        .with_word(INPUT, "input")
        .with_word(SET, "set")
        .with_word(PIN, "pin")
        .with_word(HIGH, "high")
        .with_word(WHEN, "when")
        .with_word(IS, "is")
        .with_word(COMMA, ",")
        .with_word(THE, "the")
        .with_word(UNTIL, "until")
        .with_word(LOW, "low")
        .with_token(WHEN_TOKEN, TokenDefinition::new(TokenId::LITERAL, vec![WHEN]))
        .with_token(REGISTER_TOKEN, TokenDefinition::new(TokenId::new(2), vec![PIN]))
        .with_token(IS_TOKEN, TokenDefinition::new(TokenId::LITERAL, vec![IS]))
        .with_frame(SET_FRAME, 3)
        .with_frame(WHEN_FRAME, 4)
        .with_frame(STATE_FRAME, 2)
}

pub fn plain(words: &[WordId]) -> Token {
    Token::plain(words.to_vec())
}

/// `the pin is high`
pub fn pin_high_frame() -> Frame {
    Frame::new(STATE_FRAME, vec![plain(&[THE, PIN]), plain(&[IS, HIGH])])
}

/// `the pin is low`
pub fn pin_low_frame() -> Frame {
    Frame::new(STATE_FRAME, vec![plain(&[THE, PIN]), plain(&[IS, LOW])])
}

/// `until the pin`
pub fn until_frame() -> Frame {
    Frame::new(WHEN_FRAME, vec![plain(&[UNTIL]), plain(&[THE, PIN])])
}

pub fn filled(words: &[WordId]) -> Literal {
    Literal::new(vec![plain(words)])
}
