use super::*;
use crate::emitter::render_plain;
use crate::{Category, Note, SourceLocation, Span};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn unterminated_string() -> Diagnostic {
    Diagnostic::coded(
        DiagnosticCode::E002,
        SourceLocation::new("main.k", 2, 11),
        "Unclosed string literal.",
    )
    .with_context(["integer x = 1;", "String s = \"abc"])
    .with_fix("Close the string with a double quote.")
    .with_example("\"abc\"")
    .with_span_len(3)
}

// Full layout

#[test]
fn test_full_layout_plain() {
    let expected = "\
[K:E002] UnterminatedStringLiteral
ERROR (Lexical)
at main.k:2:11

1 | integer x = 1;
2 | String s = \"abc
  |            ^^^

Cause:
  Unclosed string literal.

Fix:
  Close the string with a double quote.

Example:
  \"abc\"
";
    assert_eq!(render_plain(&unterminated_string()), expected);
}

#[test]
fn test_line_numbers_right_aligned() {
    let diag = Diagnostic::coded(DiagnosticCode::E001, SourceLocation::new("a.k", 10, 0), "bad")
        .with_context(["x", "y", "#"]);
    let text = render_plain(&diag);
    assert!(text.contains(" 8 | x\n 9 | y\n10 | #\n   | ^\n"), "{text}");
}

#[test]
fn test_caret_preserves_tabs() {
    let diag = Diagnostic::coded(DiagnosticCode::E001, SourceLocation::new("a.k", 1, 5), "bad")
        .with_context(["\tx = #;"]);
    let text = render_plain(&diag);
    assert!(text.contains("1 | \tx = #;\n  | \t    ^\n"), "{text}");
}

#[test]
fn test_caret_clipped_to_line_end() {
    let diag = Diagnostic::coded(DiagnosticCode::E101, SourceLocation::new("a.k", 1, 3), "bad")
        .with_context(["123abc"])
        .with_span_len(40);
    let text = render_plain(&diag);
    assert!(text.contains("  |    ^^^\n"), "{text}");
}

#[test]
fn test_caret_past_line_end_still_drawn() {
    let diag = Diagnostic::coded(DiagnosticCode::E002, SourceLocation::new("a.k", 1, 4), "eof")
        .with_context(["\"ab"]);
    let text = render_plain(&diag);
    assert!(text.contains("  |     ^\n"), "{text}");
}

#[test]
fn test_missing_fix_gets_generic_hint() {
    let diag = Diagnostic::coded(DiagnosticCode::E001, SourceLocation::new("a.k", 1, 0), "bad")
        .with_context(["#"]);
    let text = render_plain(&diag);
    assert!(
        text.contains("Fix:\n  Run `kc explain E001` for details on this error.\n"),
        "{text}"
    );
}

#[test]
fn test_note_and_multiline_example() {
    let diag = Diagnostic::coded(DiagnosticCode::E103, SourceLocation::new("a.k", 1, 15), "too long")
        .with_context(["character c = 'ab';"])
        .with_example("character a = 'a';\ncharacter b = 'b';")
        .with_note("Use a String for text.");
    let text = render_plain(&diag);
    assert!(
        text.contains("Example:\n  character a = 'a';\n  character b = 'b';\n"),
        "{text}"
    );
    assert!(text.ends_with("\nNote:\n  Use a String for text.\n"), "{text}");
}

#[test]
fn test_debug_mode_markers() {
    let text = render(&unterminated_string(), RenderMode::Debug);
    assert!(text.starts_with("[COLOR:structure][K:[/COLOR][COLOR:error]E002[/COLOR]"));
    assert!(text.contains("[COLOR:error]^^^[/COLOR]"));
    assert!(text.contains("[COLOR:help]Fix:[/COLOR]"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_rich_mode_uses_escapes() {
    let text = render(&unterminated_string(), RenderMode::Rich);
    assert!(text.contains("\x1b[38;2;220;50;47m"));
    assert!(text.contains("\x1b[0m"));
}

// Annotated layout

#[test]
fn test_annotated_layout_from_context() {
    let diag = Diagnostic::new(
        Category::Syntax,
        "expected `;`",
        SourceLocation::new("main.k", 3, 13),
    )
    .with_context(["integer x = 1"])
    .with_secondary_span(Span::point("main.k", 1, 1))
    .with_annotation(Note::new("statements end with `;`"))
    .with_annotation(Note::with_span("declared here", Span::point("lib.k", 4, 2)));

    let expected = "
SYNTAX ERROR: expected `;`
--> main.k:3:14

 3 | integer x = 1
                  ^
 note: referenced at main.k:1:1
 note: statements end with `;`
 note: declared here --> lib.k:4:2
 fix: Review the code at the reported location.

";
    assert_eq!(render_plain(&diag), expected);
}

#[test]
fn test_annotated_rereads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "first\nsecond line\n").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let diag = Diagnostic::new(Category::Type, "mismatch", SourceLocation::new(path, 2, 7));
    let text = render_plain(&diag);
    assert!(text.contains(" 2 | second line\n"), "{text}");
    assert!(text.contains("TYPE ERROR: mismatch"), "{text}");
}

#[test]
fn test_annotated_unreadable_file_fails_soft() {
    let diag = Diagnostic::new(
        Category::Semantic,
        "undefined",
        SourceLocation::new("/nonexistent/dir/missing.k", 1, 0),
    );
    let text = render_plain(&diag);
    assert!(text.contains(" 1 | \n"), "{text}");
    assert!(text.contains("--> /nonexistent/dir/missing.k:1:1"), "{text}");
}

#[test]
fn test_warning_header_and_no_fix() {
    let diag = Diagnostic::new(Category::Warning, "unused", SourceLocation::new("", 1, 0));
    let text = render_plain(&diag);
    assert!(text.contains("\nWARNING: unused\n"), "{text}");
    assert!(!text.contains("fix:"), "{text}");
}

// Emitter

#[test]
fn test_emitter_writes_rendered_text() {
    let mut emitter = TerminalEmitter::new(Vec::new(), RenderMode::Plain);
    emitter.emit(&unterminated_string());
    emitter.flush();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, render_plain(&unterminated_string()));
}

#[test]
fn test_emit_all() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, RenderMode::Plain);

    let diagnostics = vec![
        Diagnostic::new(Category::Syntax, "error 1", SourceLocation::new("", 1, 0)),
        Diagnostic::new(Category::Semantic, "error 2", SourceLocation::new("", 1, 0)),
    ];

    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_emit_summary_errors() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, RenderMode::Plain);

    emitter.emit_summary(2, 1);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error: aborting due to 2 previous errors; 1 warning emitted\n");
}

#[test]
fn test_emit_summary_single_error() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, RenderMode::Plain);

    emitter.emit_summary(1, 0);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("previous error"));
    assert!(!text.contains("errors"));
}

#[test]
fn test_emit_summary_warnings_only() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, RenderMode::Plain);

    emitter.emit_summary(0, 3);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_nothing() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, RenderMode::Plain);
    emitter.emit_summary(0, 0);
    assert!(output.is_empty());
}

proptest! {
    #[test]
    fn plain_render_never_contains_escapes(
        message in "[ -~]{0,40}",
        line in "[ -~\t]{0,40}",
        column in 0u32..50,
        span_len in 0usize..10,
        coded in any::<bool>(),
    ) {
        let loc = SourceLocation::new("p.k", 1, column);
        let base = if coded {
            Diagnostic::coded(DiagnosticCode::E001, loc, message)
        } else {
            Diagnostic::new(Category::Syntax, message, loc)
        };
        let diag = base.with_context([line]).with_span_len(span_len);

        let rich = render(&diag, RenderMode::Rich);
        let plain = render_plain(&diag);
        let debug = render(&diag, RenderMode::Debug);
        prop_assert!(rich.contains('\x1b'));
        prop_assert!(!plain.contains('\x1b'));
        prop_assert!(!debug.contains('\x1b'));
        prop_assert_eq!(render_plain(&diag), plain);
    }
}
