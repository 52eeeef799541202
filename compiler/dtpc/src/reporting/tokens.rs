//! Token Rendering
//!
//! Turns tokens back into display text. Bit accesses print their own
//! notation, plain tokens go through the lookup, and compounds are flattened
//! recursively and joined with a single space.

use dtp_ir::{CompoundToken, Frame, Lookup, LookupError, Token};

/// Text of a single token.
pub fn token_text(token: &Token, lookup: &dyn Lookup) -> Result<String, LookupError> {
    match token {
        Token::Access(access) => Ok(access.to_string()),
        Token::Compound(compound) => compound_text(compound, lookup),
        Token::Plain { stream } => lookup.stream_text(stream),
    }
}

/// Text of a compound token: its original tokens, space-joined.
pub fn compound_text(compound: &CompoundToken, lookup: &dyn Lookup) -> Result<String, LookupError> {
    Ok(tokens_text(&compound.original_tokens, lookup)?.join(" "))
}

/// One string per token, in order.
pub fn tokens_text(tokens: &[Token], lookup: &dyn Lookup) -> Result<Vec<String>, LookupError> {
    tokens.iter().map(|token| token_text(token, lookup)).collect()
}

/// A token run as one line of text.
pub fn sentence_text(tokens: &[Token], lookup: &dyn Lookup) -> Result<String, LookupError> {
    Ok(tokens_text(tokens, lookup)?.join(" "))
}

pub fn frame_text(frame: &Frame, lookup: &dyn Lookup) -> Result<String, LookupError> {
    sentence_text(&frame.tokens, lookup)
}

/// Frames as `'first', 'second'`.
pub fn frame_list_text(frames: &[Frame], lookup: &dyn Lookup) -> Result<String, LookupError> {
    let texts = frames
        .iter()
        .map(|frame| frame_text(frame, lookup).map(|text| format!("'{text}'")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(texts.join(", "))
}
