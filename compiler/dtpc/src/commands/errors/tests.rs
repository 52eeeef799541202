use super::*;
use crate::input::SentenceKind;
use crate::problem::{GenericContext, SerializerContext, TokenizerContext, Warning};
use dtp_diagnostic::emitter::{CollectingEmitter, Emitted};
use dtp_diagnostic::Severity;
use dtp_ir::{Mappings, SearchTreeNode, WordId};
use pretty_assertions::assert_eq;
use tracing::Level;

use crate::test_log::capture_levels;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_parse_errors_options() {
    let options = parse_errors_options(&args(&[
        "project.json",
        "--mappings=maps.json",
        "-v",
        "--time",
        "--emit=log",
        "--color=never",
        "--include-comments",
    ]));

    assert_eq!(
        options,
        ErrorsOptions {
            project: Some(PathBuf::from("project.json")),
            mappings: Some(PathBuf::from("maps.json")),
            verbose: true,
            show_time: true,
            emit: EmitMode::Log,
            color: ColorMode::Never,
            include_comments: true,
        }
    );
}

#[test]
fn test_unknown_values_keep_defaults() {
    let options = parse_errors_options(&args(&["--emit=html", "--color=rainbow", "--fast"]));

    assert_eq!(options.emit, EmitMode::Terminal);
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.project, None);
}

#[test]
fn test_first_positional_is_the_project() {
    let options = parse_errors_options(&args(&["a.json", "b.json"]));
    assert_eq!(options.project, Some(PathBuf::from("a.json")));
}

fn lookup() -> Mappings {
    Mappings::new().with_word(WordId::new(1), "high")
}

fn generic(message: &str) -> Warning {
    Warning::new(GenericContext::new(message))
}

#[test]
fn test_sentences_are_visited_in_id_order() {
    let project = Project::new(vec![
        Sentence::new(3, "third").with_warning(generic("c")),
        Sentence::new(1, "first").with_warning(generic("a")),
        Sentence::new(2, "second").with_warning(generic("b")),
    ]);
    let mut emitter = CollectingEmitter::new();

    let summary = show_error_messages(&project, &lookup(), &mut emitter, &ReportConfig::default());

    assert_eq!(
        emitter.headings().collect::<Vec<_>>(),
        vec![
            "For the sentence: first",
            "For the sentence: second",
            "For the sentence: third",
        ]
    );
    assert_eq!(emitter.lines(), vec!["a", "b", "c"]);
    assert_eq!(
        summary,
        ReportSummary {
            sentences: 3,
            explained: 3,
            failed: 0,
        }
    );
}

#[test]
fn test_sentences_without_warnings_emit_nothing() {
    let project = Project::new(vec![
        Sentence::new(1, "clean"),
        Sentence::new(2, "dirty").with_warning(generic("x")),
    ]);
    let mut emitter = CollectingEmitter::new();

    show_error_messages(&project, &lookup(), &mut emitter, &ReportConfig::default());

    assert_eq!(
        emitter.headings().collect::<Vec<_>>(),
        vec!["For the sentence: dirty"]
    );
}

#[test]
fn test_comments_are_skipped_unless_requested() {
    let project = Project::new(vec![Sentence::new(1, "// note")
        .with_kind(SentenceKind::Comment)
        .with_warning(generic("comment warning"))]);

    let mut skipped = CollectingEmitter::new();
    let summary = show_error_messages(&project, &lookup(), &mut skipped, &ReportConfig::default());
    assert_eq!(summary.sentences, 0);
    assert_eq!(skipped.diagnostics().count(), 0);

    let mut included = CollectingEmitter::new();
    let config = ReportConfig {
        include_comments: true,
    };
    let summary = show_error_messages(&project, &lookup(), &mut included, &config);
    assert_eq!(summary.explained, 1);
    assert_eq!(included.lines(), vec!["comment warning"]);
}

#[test]
fn test_failing_warning_does_not_stop_the_loop() {
    let broken = Warning::new(TokenizerContext::new(
        "tokenizer",
        WordId::new(404),
        0,
        SearchTreeNode::new(),
    ));
    let project = Project::new(vec![
        Sentence::new(1, "one")
            .with_warning(broken)
            .with_warning(generic("after the failure")),
        Sentence::new(2, "two").with_warning(Warning::new(SerializerContext::new("missing"))),
    ]);
    let mut emitter = CollectingEmitter::new();

    let summary = show_error_messages(&project, &lookup(), &mut emitter, &ReportConfig::default());

    assert_eq!(summary.explained, 2);
    assert_eq!(summary.failed, 1);
    assert!(summary.has_failures());

    let diagnostics: Vec<_> = emitter.diagnostics().collect();
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].code, ErrorCode::E9002);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].notes,
        vec![
            "no word is mapped to id 404",
            "The pipeline reported: tokenizer"
        ]
    );
    assert_eq!(diagnostics[1].message, "after the failure");
    assert_eq!(diagnostics[2].code, ErrorCode::E1002);
}

#[test]
fn test_loop_ends_with_summary_and_flush() {
    let project = Project::new(vec![Sentence::new(1, "one").with_warning(generic("x"))]);
    let mut emitter = CollectingEmitter::new();

    show_error_messages(&project, &lookup(), &mut emitter, &ReportConfig::default());

    assert_eq!(
        emitter.events.last(),
        Some(&Emitted::Summary {
            explained: 1,
            failed: 0
        })
    );
    assert_eq!(emitter.flush_count(), 1);
}

#[test]
fn test_lookup_failure_is_logged_as_error() {
    let broken = Warning::new(TokenizerContext::new(
        "tokenizer",
        WordId::new(404),
        0,
        SearchTreeNode::new(),
    ));
    let project = Project::new(vec![Sentence::new(1, "one").with_warning(broken)]);
    let mut emitter = CollectingEmitter::new();

    let levels = capture_levels(|| {
        show_error_messages(&project, &lookup(), &mut emitter, &ReportConfig::default());
    });

    assert_eq!(levels, vec![Level::DEBUG, Level::ERROR]);
}
