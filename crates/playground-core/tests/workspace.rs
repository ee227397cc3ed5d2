//! Workspace command routing: notifications, no-ops, and tab alignment.

use playground_core::{
    ChangeKind, Command, CursorCommand, EditCommand, Surface, Workspace, WorkspaceChange,
    WorkspaceError,
};
use std::sync::{Arc, Mutex};

fn insert(text: &str) -> Command {
    Command::Edit(EditCommand::InsertText {
        text: text.to_string(),
    })
}

fn capture(workspace: &mut Workspace) -> Arc<Mutex<Vec<WorkspaceChange>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    workspace.subscribe(move |change| {
        sink.lock().unwrap().push(change.clone());
    });
    changes
}

#[test]
fn test_edit_notifies_and_recomposes() {
    let mut workspace = Workspace::empty();
    let changes = capture(&mut workspace);
    let generation = workspace.preview().generation();

    workspace
        .execute(Surface::Style, insert("p { color: red; }"))
        .unwrap();

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].surface, Surface::Style);
    assert_eq!(changes[0].kind, ChangeKind::ContentEdited);
    assert_eq!(changes[0].old_version, 0);
    assert_eq!(changes[0].new_version, 1);

    assert_eq!(workspace.version(), 1);
    assert_eq!(workspace.preview().generation(), generation + 1);
    assert!(workspace.preview().text().contains("p { color: red; }"));
}

#[test]
fn test_cursor_motion_notifies_without_recomposing() {
    let mut workspace = Workspace::new("hello", "", "");
    let changes = capture(&mut workspace);
    let generation = workspace.preview().generation();

    workspace
        .execute(Surface::Markup, Command::Cursor(CursorCommand::MoveRight))
        .unwrap();

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::CursorMoved);
    assert_eq!(workspace.preview().generation(), generation);
}

#[test]
fn test_noop_commands_do_not_notify_or_bump() {
    let mut workspace = Workspace::empty();
    let changes = capture(&mut workspace);

    // Cursor at the origin, nothing to delete, nothing to insert.
    workspace
        .execute(Surface::Markup, Command::Cursor(CursorCommand::MoveLeft))
        .unwrap();
    workspace
        .execute(Surface::Markup, Command::Edit(EditCommand::Backspace))
        .unwrap();
    workspace.execute(Surface::Markup, insert("")).unwrap();

    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(workspace.version(), 0);
    assert!(!workspace.has_changed_since(0));
}

#[test]
fn test_each_surface_keeps_its_own_buffer() {
    let mut workspace = Workspace::empty();

    workspace.execute(Surface::Markup, insert("<p>hi</p>")).unwrap();
    workspace.execute(Surface::Script, insert("let x = 1;")).unwrap();

    assert_eq!(workspace.buffer(Surface::Markup).text(), "<p>hi</p>");
    assert_eq!(workspace.buffer(Surface::Style).text(), "");
    assert_eq!(workspace.buffer(Surface::Script).text(), "let x = 1;");
}

#[test]
fn test_cycle_active_wraps_over_the_three_surfaces() {
    let mut workspace = Workspace::empty();
    assert_eq!(workspace.active_surface(), Surface::Markup);

    assert_eq!(workspace.cycle_active(), Surface::Style);
    assert_eq!(workspace.cycle_active(), Surface::Script);
    assert_eq!(workspace.cycle_active(), Surface::Markup);
}

#[test]
fn test_execute_active_follows_the_active_surface() {
    let mut workspace = Workspace::empty();
    workspace.set_active(Surface::Script);

    workspace.execute_active(insert("alert(1)")).unwrap();

    assert_eq!(workspace.buffer(Surface::Script).text(), "alert(1)");
    assert!(workspace.buffer(Surface::Markup).is_empty());
}

#[test]
fn test_failed_command_reports_surface_and_keeps_version() {
    let mut workspace = Workspace::new("one line", "", "");
    let changes = capture(&mut workspace);

    let err = workspace
        .execute(
            Surface::Markup,
            Command::Cursor(CursorCommand::MoveTo { line: 99, column: 0 }),
        )
        .unwrap_err();

    match err {
        WorkspaceError::CommandFailed { surface, .. } => {
            assert_eq!(surface, Surface::Markup);
        }
    }
    assert_eq!(workspace.version(), 0);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_has_changed_since_tracks_versions() {
    let mut workspace = Workspace::empty();
    let before = workspace.version();

    workspace.execute(Surface::Markup, insert("x")).unwrap();

    assert!(workspace.has_changed_since(before));
    assert!(!workspace.has_changed_since(workspace.version()));
}

#[test]
fn test_tab_aligns_to_the_next_tab_stop() {
    let mut workspace = Workspace::empty();

    // From column 0 a tab is a full stop's worth of spaces.
    workspace
        .execute(Surface::Script, Command::Edit(EditCommand::InsertTab))
        .unwrap();
    assert_eq!(workspace.buffer(Surface::Script).text(), "    ");

    // From column 6 it only pads out to column 8.
    workspace.execute(Surface::Script, insert("ab")).unwrap();
    workspace
        .execute(Surface::Script, Command::Edit(EditCommand::InsertTab))
        .unwrap();
    assert_eq!(workspace.buffer(Surface::Script).text(), "    ab  ");
    assert_eq!(workspace.buffer(Surface::Script).cursor().column, 8);
}
