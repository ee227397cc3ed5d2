//! Window drag example
//!
//! Walks the floating-panel state machine through a full drag: grab a
//! header, move the pointer, release, and watch z-order follow along.

use playground_core::{PanelId, PointerHit, Rect, WindowManager};

fn print_stack(manager: &WindowManager) {
    for id in manager.panels_back_to_front() {
        let panel = manager.panel(id).unwrap();
        let frame = panel.frame();
        println!(
            "  z={} {:14} at ({:3},{:3}) {}x{}{}",
            panel.z,
            id.label(),
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            if panel.dragging { "  [dragging]" } else { "" }
        );
    }
}

fn main() {
    println!("=== Window Drag Example ===\n");

    let mut manager = WindowManager::new([
        (PanelId::Editors, Rect::new(0, 0, 40, 14)),
        (PanelId::Preview, Rect::new(42, 0, 38, 14)),
        (PanelId::Metrics, Rect::new(42, 15, 38, 8)),
        (PanelId::Console, Rect::new(0, 15, 40, 8)),
    ]);
    manager.set_bounds(Rect::new(0, 0, 100, 30));

    println!("Initial stack (back to front):");
    print_stack(&manager);
    println!();

    // Example 1: grab a header
    println!("1. Pointer down on the preview header at (50, 0):");
    match manager.pointer_down(50, 0) {
        PointerHit::DragStarted(id) => println!("  drag started on {}", id.label()),
        other => println!("  unexpected: {other:?}"),
    }
    print_stack(&manager);
    println!();

    // Example 2: move the pointer
    println!("2. Dragging the pointer to (20, 10):");
    manager.pointer_move(20, 10);
    let frame = manager.frame(PanelId::Preview).unwrap();
    println!(
        "  panel origin follows pointer minus grab offset: ({}, {})",
        frame.x, frame.y
    );
    println!();

    // Example 3: release
    println!("3. Pointer up:");
    if let Some(id) = manager.pointer_up() {
        println!("  drag ended on {}", id.label());
    }
    print_stack(&manager);
    println!();

    // Example 4: body clicks focus without dragging
    println!("4. Pointer down on the editors body at (5, 5):");
    match manager.pointer_down(5, 5) {
        PointerHit::Panel(id) => println!("  hit {} body (no drag)", id.label()),
        other => println!("  unexpected: {other:?}"),
    }
    println!();

    // Example 5: bounds keep panels on screen
    println!("5. Dragging the console far off the bottom-right:");
    manager.pointer_down(5, 15);
    manager.pointer_move(500, 500);
    manager.pointer_up();
    let frame = manager.frame(PanelId::Console).unwrap();
    println!("  clamped to ({}, {}) inside 100x30", frame.x, frame.y);
    println!();

    println!("Final stack:");
    print_stack(&manager);

    println!("\n=== Example Complete ===");
}
