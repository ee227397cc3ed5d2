//! Preview composition: verbatim embedding and full-replacement semantics.

use playground_core::{Command, EditCommand, Surface, Workspace, compose};
use pretty_assertions::assert_eq;

#[test]
fn test_compose_embeds_all_three_verbatim() {
    let document = compose("<p>hi</p>", "p{color:red}", "console.log(1)");

    assert!(document.contains("<style>p{color:red}</style>"));
    assert!(document.contains("<p>hi</p>"));
    assert!(document.contains("<script>console.log(1)</script>"));
}

#[test]
fn test_compose_skeleton_ordering() {
    let document = compose("MARKUP", "STYLE", "SCRIPT");

    let doctype = document.find("<!DOCTYPE html>").unwrap();
    let style = document.find("STYLE").unwrap();
    let markup = document.find("MARKUP").unwrap();
    let script = document.find("SCRIPT").unwrap();
    let close = document.find("</html>").unwrap();

    assert!(doctype < style);
    assert!(style < markup);
    assert!(markup < script);
    assert!(script < close);
}

#[test]
fn test_compose_exact_document() {
    assert_eq!(
        compose("<p>hi</p>", "p{color:red}", "console.log(1)"),
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><style>p{color:red}</style></head>\n\
         <body><p>hi</p><script>console.log(1)</script></body>\n\
         </html>\n"
    );
}

#[test]
fn test_malformed_input_passes_through_untouched() {
    // No validation, no escaping: broken markup flows through verbatim.
    let document = compose("<div><span>", "p { color:", "function ( {");

    assert!(document.contains("<div><span>"));
    assert!(document.contains("p { color:"));
    assert!(document.contains("function ( {"));
}

#[test]
fn test_workspace_composes_once_at_construction() {
    let workspace = Workspace::new("<b>seed</b>", "", "");

    assert_eq!(workspace.preview().generation(), 1);
    assert!(workspace.preview().text().contains("<b>seed</b>"));
}

#[test]
fn test_edit_fully_replaces_previous_document() {
    let mut workspace = Workspace::empty();
    workspace
        .execute(
            Surface::Markup,
            Command::Edit(EditCommand::InsertText {
                text: "<p>first</p>".to_string(),
            }),
        )
        .unwrap();
    let first_generation = workspace.preview().generation();
    assert!(workspace.preview().text().contains("<p>first</p>"));

    // Delete everything, then write new content.
    for _ in 0.."<p>first</p>".len() {
        workspace
            .execute(Surface::Markup, Command::Edit(EditCommand::Backspace))
            .unwrap();
    }
    workspace
        .execute(
            Surface::Markup,
            Command::Edit(EditCommand::InsertText {
                text: "<p>second</p>".to_string(),
            }),
        )
        .unwrap();

    assert!(!workspace.preview().text().contains("first"));
    assert!(workspace.preview().text().contains("<p>second</p>"));
    assert!(workspace.preview().generation() > first_generation);
}

#[test]
fn test_preview_reflects_latest_of_all_three_surfaces() {
    let mut workspace = Workspace::empty();

    // Interleave edits across surfaces; the preview must always hold the
    // latest snapshot of every surface simultaneously.
    workspace
        .execute(
            Surface::Markup,
            Command::Edit(EditCommand::InsertText {
                text: "<p>hi</p>".to_string(),
            }),
        )
        .unwrap();
    workspace
        .execute(
            Surface::Script,
            Command::Edit(EditCommand::InsertText {
                text: "console.log(1)".to_string(),
            }),
        )
        .unwrap();
    workspace
        .execute(
            Surface::Style,
            Command::Edit(EditCommand::InsertText {
                text: "p{color:red}".to_string(),
            }),
        )
        .unwrap();

    let text = workspace.preview().text();
    assert!(text.contains("<p>hi</p>"));
    assert!(text.contains("p{color:red}"));
    assert!(text.contains("console.log(1)"));

    // Another markup edit must not revert the other two surfaces.
    workspace
        .execute(
            Surface::Markup,
            Command::Edit(EditCommand::InsertText {
                text: "<hr>".to_string(),
            }),
        )
        .unwrap();
    let text = workspace.preview().text();
    assert!(text.contains("<p>hi</p><hr>"));
    assert!(text.contains("p{color:red}"));
    assert!(text.contains("console.log(1)"));
}

#[test]
fn test_cursor_motion_never_recomposes() {
    let mut workspace = Workspace::new("<p>hi</p>", "", "");
    let generation = workspace.preview().generation();

    workspace
        .execute(
            Surface::Markup,
            Command::Cursor(playground_core::CursorCommand::MoveTo { line: 0, column: 3 }),
        )
        .unwrap();

    assert_eq!(workspace.preview().generation(), generation);
}
