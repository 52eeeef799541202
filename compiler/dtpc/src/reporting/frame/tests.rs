use super::*;
use crate::problem::Context;
use crate::reporting::fixtures::*;
use dtp_diagnostic::ErrorCode;
use dtp_ir::{BitAccess, Literal};
use pretty_assertions::assert_eq;
use tracing::Level;

use crate::test_log::capture_events;

fn set_pin_high(literals: Vec<Literal>) -> Frame {
    Frame::new(SET_FRAME, vec![plain(&[SET]), plain(&[PIN]), plain(&[HIGH])])
        .with_literals(literals)
}

fn render(context: &FrameFinderContext) -> Diagnostic {
    let lookup = mappings();
    match ContextRenderer::new(&lookup).render_frame_finder(context) {
        Ok(diag) => diag,
        Err(err) => panic!("lookup failed: {err}"),
    }
}

#[test]
fn test_empty_literal_reports_one_based_position() {
    let frame = set_pin_high(vec![filled(&[PIN]), filled(&[HIGH]), Literal::empty()]);
    let diag = render(&FrameFinderContext::matched("Literal left empty", frame));

    assert_eq!(diag.code, ErrorCode::E3001);
    assert_eq!(
        diag.lines().collect::<Vec<_>>(),
        vec![
            "Literal left empty",
            "In the frame 'set pin high' at literal 3. Fill in the missing information.",
        ]
    );
}

#[test]
fn test_first_empty_literal_wins() {
    let frame = set_pin_high(vec![Literal::empty(), filled(&[HIGH]), Literal::empty()]);
    let diag = render(&FrameFinderContext::matched("Literal left empty", frame));

    assert_eq!(
        diag.notes,
        vec!["In the frame 'set pin high' at literal 1. Fill in the missing information."]
    );
}

#[test]
fn test_short_literal_count_suggests_reordering() {
    let frame = Frame::new(WHEN_FRAME, vec![plain(&[WHEN]), plain(&[PIN, HIGH])])
        .with_literals(vec![filled(&[PIN]), filled(&[HIGH])]);
    let diag = render(&FrameFinderContext::matched("Too few literals", frame));

    assert_eq!(
        diag.notes,
        vec![
            "The found frame: 'when pin high' expected 4 literals.".to_string(),
            REORDER_HINT.to_string(),
        ]
    );
    assert!(!diag.notes.iter().any(|note| note == CONTACT_DEVELOPER));
}

#[test]
fn test_full_literal_count_is_an_inconsistency() {
    let frame = set_pin_high(vec![filled(&[SET]), filled(&[PIN]), filled(&[HIGH])]);
    let diag = render(&FrameFinderContext::matched("Frame rejected", frame));

    let inconsistency = Inconsistency::LiteralCountNotShort {
        frame: SET_FRAME,
        actual: 3,
        expected: 3,
    };
    assert_eq!(
        diag.notes,
        vec![
            "The found frame: 'set pin high' expected 3 literals.".to_string(),
            inconsistency.to_string(),
            CONTACT_DEVELOPER.to_string(),
        ]
    );
    assert!(diag.notes[1].starts_with("frame 100 has 3 filled literals of 3 expected"));
}

#[test]
fn test_inconsistency_logs_at_info() {
    let frame = set_pin_high(vec![filled(&[SET]), filled(&[PIN]), filled(&[HIGH])]);
    let context = FrameFinderContext::matched("Frame rejected", frame);

    let events = capture_events(|| {
        let _ = render(&context);
    });

    assert_eq!(
        events,
        vec![(Level::INFO, "inconsistent frame finder context".to_string())]
    );
}

#[test]
fn test_short_literal_count_logs_nothing() {
    let frame = Frame::new(WHEN_FRAME, vec![plain(&[WHEN]), plain(&[PIN, HIGH])])
        .with_literals(vec![filled(&[PIN]), filled(&[HIGH])]);
    let context = FrameFinderContext::matched("Too few literals", frame);

    let events = capture_events(|| {
        let _ = render(&context);
    });

    assert_eq!(events, Vec::new());
}

#[test]
fn test_unknown_frame_definition_fails() {
    let lookup = mappings();
    let frame = Frame::new(FrameId::new(555), vec![plain(&[PIN])]);
    let context = FrameFinderContext::matched("no definition", frame);

    assert_eq!(
        ContextRenderer::new(&lookup).render_frame_finder(&context),
        Err(LookupError::UnknownFrame(FrameId::new(555)))
    );
}

#[test]
fn test_pending_without_tokens() {
    let context = FrameFinderContext::pending(
        "No frame matched",
        pin_high_frame(),
        SearchTreeNode::new().with_option(WHEN_TOKEN),
        Vec::new(),
    );
    let diag = render(&context);

    assert_eq!(
        diag.notes,
        vec![
            "Complete literal frame. No valid frame available for parsing. \
             This can be solved by adding a new mapping or alias to the frame mappings."
        ]
    );
}

#[test]
fn test_pending_reports_problem_token_and_options() {
    let lookahead = SearchTreeNode::new()
        .with_option(IS_TOKEN)
        .with_option(REGISTER_TOKEN)
        .with_option(TokenId::LEAF);
    let tokens = vec![plain(&[WHEN]), plain(&[THE, PIN]), plain(&[HIGH])];
    let context =
        FrameFinderContext::pending("Unexpected token", pin_high_frame(), lookahead, tokens);

    let diag = render(&context);

    assert_eq!(
        diag.notes,
        vec![
            "Encountered an unexpected token when parsing the semantic expression. \
             At the token: 'high'. So far: [when the pin] Expected options: [LEAF,  _ , is]"
        ]
    );
}

#[test]
fn test_pending_with_single_bit_access_token() {
    let context = FrameFinderContext::pending(
        "Unexpected token",
        pin_high_frame(),
        SearchTreeNode::new().with_option(WHEN_TOKEN),
        vec![BitAccess::bit("P0", 1).into()],
    );

    let diag = render(&context);

    assert_eq!(
        diag.notes,
        vec![
            "Encountered an unexpected token when parsing the semantic expression. \
             At the token: 'P0.1'. So far: [] Expected options: [when]"
        ]
    );
}

#[test]
fn test_rendering_does_not_consume_tokens() {
    let tokens = vec![plain(&[WHEN]), plain(&[THE, PIN]), plain(&[HIGH])];
    let context: Context = FrameFinderContext::pending(
        "Unexpected token",
        pin_high_frame(),
        SearchTreeNode::new().with_option(IS_TOKEN),
        tokens.clone(),
    )
    .into();
    let lookup = mappings();
    let renderer = ContextRenderer::new(&lookup);

    let first = renderer.render(&context);
    let second = renderer.render(&context);

    assert_eq!(first, second);
    let Context::FrameFinder(finder) = &context else {
        panic!("expected a frame finder context");
    };
    assert_eq!(
        finder.search,
        FrameSearch::Pending {
            lookahead: SearchTreeNode::new().with_option(IS_TOKEN),
            tokens,
        }
    );
}
