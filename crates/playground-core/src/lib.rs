#![warn(missing_docs)]
//! Playground Core - Headless Live Code Playground Engine
//!
//! # Overview
//!
//! `playground-core` is the headless engine behind a live code playground:
//! three coordinated editing surfaces (markup, style, script), a preview
//! document recomposed on every edit, draggable floating panels with a
//! z-order state machine, and the simulated dashboard trimmings (metrics,
//! canned assistant, themes, particle scene). It does no rendering and owns
//! no clock: the front end drives it with commands, pointer events, and
//! explicit `Instant`s, which keeps every piece testable without a terminal.
//!
//! # Core Features
//!
//! - **Coordinated Surfaces**: rope-backed buffers with grapheme-aware
//!   editing behind one command interface
//! - **Preview Composition**: full-replacement document synthesis on every
//!   edit, never a stale mixture of surfaces
//! - **Window Management**: absolute-recompute dragging, global
//!   bring-to-front, at most one active drag
//! - **Simulated Dashboard**: bounded random metrics over fixed rolling
//!   windows, deterministic under a seed
//! - **Assistant Scheduling**: deadline-driven canned messages with
//!   replace-not-stack semantics
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Workspace (commands, subscriptions)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Preview Composition                        │  ← Document Synthesis
//! ├─────────────────────────────────────────────┤
//! │  Editor Buffers (Rope-based)                │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ┌──────────────┬───────────┬─────────┬───────┐
//! │ WindowManager│ Metrics   │Assistant│ Scene │  ← Independent State
//! └──────────────┴───────────┴─────────┴───────┘
//! ```
//!
//! # Quick Start
//!
//! ## Editing and composition
//!
//! ```rust
//! use playground_core::{Command, EditCommand, Surface, Workspace};
//!
//! let mut workspace = Workspace::empty();
//!
//! workspace
//!     .execute(
//!         Surface::Style,
//!         Command::Edit(EditCommand::InsertText {
//!             text: "p { color: red; }".to_string(),
//!         }),
//!     )
//!     .unwrap();
//!
//! assert!(workspace.preview().text().contains("p { color: red; }"));
//! ```
//!
//! ## Dragging a panel
//!
//! ```rust
//! use playground_core::{PanelId, PointerHit, Rect, WindowManager};
//!
//! let mut manager = WindowManager::new([
//!     (PanelId::Editors, Rect::new(0, 0, 40, 12)),
//!     (PanelId::Preview, Rect::new(40, 0, 40, 12)),
//! ]);
//!
//! assert_eq!(
//!     manager.pointer_down(5, 0),
//!     PointerHit::DragStarted(PanelId::Editors)
//! );
//! manager.pointer_move(25, 8);
//! manager.pointer_up();
//! assert_eq!(manager.frame(PanelId::Editors).unwrap().y, 8);
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - Rope-backed editing surfaces
//! - [`workspace`] - Command interface over the three surfaces
//! - [`compose`] - Preview document synthesis
//! - [`windows`] - Floating-panel drag and z-order state machine
//! - [`metrics`] - Simulated rolling-window metrics
//! - [`assistant`] - Canned-message scheduling
//! - [`theme`] - Theme cycle and palettes
//! - [`scene`] - Decorative particle field and orb

pub mod assistant;
pub mod buffer;
pub mod compose;
pub mod metrics;
pub mod scene;
pub mod theme;
pub mod windows;
pub mod workspace;

pub use assistant::{
    AUTO_HIDE, Assistant, EXPORT_COMPLETE, EXPORT_STARTED, SUGGESTION_PERIOD,
    SUGGESTION_PROBABILITY, SUGGESTIONS, WELCOME, WELCOME_DELAY,
};
pub use buffer::{BufferError, EditorBuffer, Position};
pub use compose::{PreviewDocument, compose};
pub use metrics::{MetricKind, MetricsSimulator, WINDOW_LEN};
pub use scene::{Orb, ProjectedPoint, SceneState};
pub use theme::{Palette, Rgb, Theme};
pub use windows::{
    PanelId, PanelState, PointerHit, Rect, WindowError, WindowManager, Z_BASELINE, Z_RAISED,
};
pub use workspace::{
    ChangeCallback, ChangeKind, Command, CursorCommand, EditCommand, Surface, TAB_STOP, Workspace,
    WorkspaceChange, WorkspaceError,
};
