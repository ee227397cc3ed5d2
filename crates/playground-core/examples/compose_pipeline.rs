//! Composition pipeline example
//!
//! Demonstrates driving the three surfaces through the `Workspace` command
//! interface and watching the preview document get replaced on every edit.

use playground_core::{Command, CursorCommand, EditCommand, Surface, Workspace};
use std::sync::{Arc, Mutex};

fn main() {
    println!("=== Composition Pipeline Example ===\n");

    let mut workspace = Workspace::empty();
    println!(
        "Created an empty workspace (preview generation {})\n",
        workspace.preview().generation()
    );

    // Example 1: change notifications
    println!("1. Subscribing to changes:");
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    workspace.subscribe(move |change| {
        sink.lock().unwrap().push(format!(
            "{} {:?} v{} -> v{}",
            change.surface.label(),
            change.kind,
            change.old_version,
            change.new_version
        ));
    });
    println!("  every notified change will be recorded\n");

    // Example 2: seeding the three surfaces
    println!("2. Editing each surface:");
    let seeds = [
        (Surface::Markup, "<h1>Quantum Nexus</h1>"),
        (Surface::Style, "h1 { color: #00f0ff; }"),
        (Surface::Script, "console.log('ready');"),
    ];
    for (surface, text) in seeds {
        workspace
            .execute(
                surface,
                Command::Edit(EditCommand::InsertText {
                    text: text.to_string(),
                }),
            )
            .unwrap();
        println!("  {} <- '{}'", surface.label(), text);
    }
    println!(
        "  preview generation is now {} (one rebuild per edit)\n",
        workspace.preview().generation()
    );

    // Example 3: the composed document
    println!("3. Composed preview:");
    for line in workspace.preview().text().lines() {
        println!("  | {line}");
    }
    println!();

    // Example 4: cursor motion never recomposes
    println!("4. Cursor motion:");
    let generation = workspace.preview().generation();
    workspace
        .execute(
            Surface::Markup,
            Command::Cursor(CursorCommand::MoveTo { line: 0, column: 4 }),
        )
        .unwrap();
    println!("  moved the markup cursor to (0, 4)");
    println!(
        "  preview generation unchanged: {} == {}\n",
        workspace.preview().generation(),
        generation
    );

    // Example 5: full replacement, never a stale mixture
    println!("5. Replacing the stylesheet:");
    workspace.set_active(Surface::Style);
    workspace
        .execute_active(Command::Cursor(CursorCommand::MoveLineEnd))
        .unwrap();
    for _ in 0..workspace.buffer(Surface::Style).char_count() {
        workspace
            .execute_active(Command::Edit(EditCommand::Backspace))
            .unwrap();
    }
    workspace
        .execute_active(Command::Edit(EditCommand::InsertText {
            text: "h1 { color: hotpink; }".to_string(),
        }))
        .unwrap();
    let preview = workspace.preview().text();
    println!("  old color present: {}", preview.contains("#00f0ff"));
    println!("  new color present: {}\n", preview.contains("hotpink"));

    // Example 6: error handling
    println!("6. Error handling:");
    match workspace.execute(
        Surface::Script,
        Command::Cursor(CursorCommand::MoveTo { line: 42, column: 0 }),
    ) {
        Ok(()) => println!("  unexpected success"),
        Err(err) => println!("  expected error: {err}"),
    }
    println!();

    // Example 7: the recorded change log
    println!("7. Change log:");
    for entry in log.lock().unwrap().iter() {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}
