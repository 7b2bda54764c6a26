use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("unknown scope provider `app.MainScope`")
        .with_label("app.Repository", "declared `launchOnScope = MainScope::class` here")
        .with_secondary_label("app.MainScope", "not exported as a scope provider")
        .with_note("only exported scope providers can be referenced")
        .with_suggestion("annotate `app.MainScope` as an exported scope provider")
}

#[test]
fn test_builder_collects_parts() {
    let diag = sample();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_subject() {
    assert_eq!(sample().primary_subject(), Some("app.Repository"));
    let bare = Diagnostic::error(ErrorCode::E2001).with_message("cycle");
    assert_eq!(bare.primary_subject(), None);
}

#[test]
fn test_display_format() {
    let text = sample().to_string();
    let expected = "error [E1002]: unknown scope provider `app.MainScope`\n  \
                    --> app.Repository: declared `launchOnScope = MainScope::class` here\n      \
                    app.MainScope: not exported as a scope provider\n  \
                    = note: only exported scope providers can be referenced\n  \
                    = help: annotate `app.MainScope` as an exported scope provider";
    assert_eq!(text, expected);
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1006).with_message("dup");
    assert!(!diag.is_error());
    assert_eq!(diag.severity.to_string(), "warning");
}
