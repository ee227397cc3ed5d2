//! Workspace layer: the three editing surfaces behind one command interface.
//!
//! # Overview
//!
//! [`Workspace`] owns one [`EditorBuffer`] per [`Surface`], the composed
//! [`PreviewDocument`], and the change subscriptions. All mutation goes
//! through [`Workspace::execute`], which:
//!
//! - applies the command to the addressed buffer,
//! - detects no-ops (a backspace at the origin changes nothing and notifies
//!   nobody),
//! - recomposes the preview after every content edit, from fresh snapshots
//!   of all three buffers,
//! - bumps the workspace version and notifies subscribers.
//!
//! Cursor commands notify with [`ChangeKind::CursorMoved`] and leave the
//! preview untouched.
//!
//! # Example
//!
//! ```rust
//! use playground_core::{Command, EditCommand, Surface, Workspace};
//!
//! let mut workspace = Workspace::empty();
//! workspace
//!     .execute(
//!         Surface::Markup,
//!         Command::Edit(EditCommand::InsertText {
//!             text: "<p>hi</p>".to_string(),
//!         }),
//!     )
//!     .unwrap();
//!
//! assert!(workspace.preview().text().contains("<p>hi</p>"));
//! ```

use crate::buffer::{EditorBuffer, Position};
use crate::compose::PreviewDocument;

/// Number of spaces a Tab keypress inserts.
pub const TAB_STOP: usize = 4;

/// Identity of one editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The markup (body content) surface.
    Markup,
    /// The stylesheet surface.
    Style,
    /// The script surface.
    Script,
}

impl Surface {
    /// Every surface, in display order.
    pub const ALL: [Surface; 3] = [Surface::Markup, Surface::Style, Surface::Script];

    /// Short label used in pane titles.
    pub fn label(self) -> &'static str {
        match self {
            Surface::Markup => "HTML",
            Surface::Style => "CSS",
            Surface::Script => "JS",
        }
    }

    /// The surface following `self` in display order, wrapping at the end.
    pub fn next(self) -> Surface {
        match self {
            Surface::Markup => Surface::Style,
            Surface::Style => Surface::Script,
            Surface::Script => Surface::Markup,
        }
    }
}

/// Text editing commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert a single character at the cursor
    InsertChar {
        /// Character to insert.
        ch: char,
    },
    /// Insert text (possibly multi-line) at the cursor
    InsertText {
        /// Text to insert.
        text: String,
    },
    /// Insert a line break at the cursor
    InsertNewline,
    /// Insert spaces up to [`TAB_STOP`]
    InsertTab,
    /// Delete the grapheme cluster before the cursor
    Backspace,
    /// Delete the grapheme cluster after the cursor
    DeleteForward,
}

/// Cursor commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorCommand {
    /// Move cursor to the specified position
    MoveTo {
        /// Target logical line index.
        line: usize,
        /// Target column in characters (will be clamped to line length).
        column: usize,
    },
    /// Move one grapheme cluster left
    MoveLeft,
    /// Move one grapheme cluster right
    MoveRight,
    /// Move one line up
    MoveUp,
    /// Move one line down
    MoveDown,
    /// Move to the start of the cursor line
    MoveLineStart,
    /// Move to the end of the cursor line
    MoveLineEnd,
}

/// A command addressed to one surface's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Content mutation; triggers preview recomposition.
    Edit(EditCommand),
    /// Cursor motion; never touches the preview.
    Cursor(CursorCommand),
}

/// Workspace operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// A command failed against a surface's buffer
    CommandFailed {
        /// Surface the command was addressed to.
        surface: Surface,
        /// Underlying failure message.
        message: String,
    },
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceError::CommandFailed { surface, message } => {
                write!(f, "Command failed on {} surface: {}", surface.label(), message)
            }
        }
    }
}

impl std::error::Error for WorkspaceError {}

/// What kind of change a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Buffer content changed; the preview was recomposed.
    ContentEdited,
    /// Only the cursor moved.
    CursorMoved,
}

/// Change record delivered to subscribers.
#[derive(Debug, Clone)]
pub struct WorkspaceChange {
    /// Surface the change happened on.
    pub surface: Surface,
    /// Change kind.
    pub kind: ChangeKind,
    /// Workspace version before the change.
    pub old_version: u64,
    /// Workspace version after the change.
    pub new_version: u64,
}

/// Change callback function type
pub type ChangeCallback = Box<dyn FnMut(&WorkspaceChange) + Send>;

/// The three coordinated surfaces plus the composed preview.
pub struct Workspace {
    markup: EditorBuffer,
    style: EditorBuffer,
    script: EditorBuffer,
    active: Surface,
    preview: PreviewDocument,
    callbacks: Vec<ChangeCallback>,
    version: u64,
}

impl Workspace {
    /// Create a workspace with empty surfaces. The preview is composed once
    /// up front so it is populated before the first edit.
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    /// Create a workspace seeded with per-surface text.
    pub fn new(markup: &str, style: &str, script: &str) -> Self {
        let mut workspace = Self {
            markup: EditorBuffer::new(markup),
            style: EditorBuffer::new(style),
            script: EditorBuffer::new(script),
            active: Surface::Markup,
            preview: PreviewDocument::new(),
            callbacks: Vec::new(),
            version: 0,
        };
        workspace.recompose();
        workspace
    }

    /// The buffer behind `surface`.
    pub fn buffer(&self, surface: Surface) -> &EditorBuffer {
        match surface {
            Surface::Markup => &self.markup,
            Surface::Style => &self.style,
            Surface::Script => &self.script,
        }
    }

    /// The surface currently receiving keyboard input.
    pub fn active_surface(&self) -> Surface {
        self.active
    }

    /// Change the active surface.
    pub fn set_active(&mut self, surface: Surface) {
        self.active = surface;
    }

    /// Advance the active surface in display order.
    pub fn cycle_active(&mut self) -> Surface {
        self.active = self.active.next();
        self.active
    }

    /// The current composed document.
    pub fn preview(&self) -> &PreviewDocument {
        &self.preview
    }

    /// Workspace version, bumped by every notified change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Subscribe to change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&WorkspaceChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Execute a command against the active surface.
    pub fn execute_active(&mut self, command: Command) -> Result<(), WorkspaceError> {
        self.execute(self.active, command)
    }

    /// Execute a command against `surface`.
    ///
    /// No-op commands (a cursor already at its target, a backspace at the
    /// origin) complete successfully without recomposing or notifying.
    pub fn execute(&mut self, surface: Surface, command: Command) -> Result<(), WorkspaceError> {
        let kind = match command {
            Command::Edit(_) => ChangeKind::ContentEdited,
            Command::Cursor(_) => ChangeKind::CursorMoved,
        };
        let changed = self.apply(surface, command)?;
        if !changed {
            return Ok(());
        }
        if kind == ChangeKind::ContentEdited {
            self.recompose();
        }
        self.notify(surface, kind);
        Ok(())
    }

    fn apply(&mut self, surface: Surface, command: Command) -> Result<bool, WorkspaceError> {
        let buffer = self.buffer_mut(surface);
        let changed = match command {
            Command::Edit(edit) => match edit {
                EditCommand::InsertChar { ch } => {
                    buffer.insert_char(ch);
                    true
                }
                EditCommand::InsertText { text } => {
                    if text.is_empty() {
                        false
                    } else {
                        buffer.insert_str(&text);
                        true
                    }
                }
                EditCommand::InsertNewline => {
                    buffer.insert_newline();
                    true
                }
                EditCommand::InsertTab => {
                    let x = buffer.cursor_visual_x();
                    let spaces = TAB_STOP - x % TAB_STOP;
                    buffer.insert_str(&" ".repeat(spaces));
                    true
                }
                EditCommand::Backspace => buffer.backspace(),
                EditCommand::DeleteForward => buffer.delete_forward(),
            },
            Command::Cursor(cursor) => match cursor {
                CursorCommand::MoveTo { line, column } => buffer
                    .set_cursor(Position::new(line, column))
                    .map_err(|err| WorkspaceError::CommandFailed {
                        surface,
                        message: err.to_string(),
                    })?,
                CursorCommand::MoveLeft => buffer.move_left(),
                CursorCommand::MoveRight => buffer.move_right(),
                CursorCommand::MoveUp => buffer.move_up(),
                CursorCommand::MoveDown => buffer.move_down(),
                CursorCommand::MoveLineStart => buffer.move_line_start(),
                CursorCommand::MoveLineEnd => buffer.move_line_end(),
            },
        };
        Ok(changed)
    }

    fn buffer_mut(&mut self, surface: Surface) -> &mut EditorBuffer {
        match surface {
            Surface::Markup => &mut self.markup,
            Surface::Style => &mut self.style,
            Surface::Script => &mut self.script,
        }
    }

    fn recompose(&mut self) {
        let markup = self.markup.text();
        let style = self.style.text();
        let script = self.script.text();
        self.preview.rebuild(&markup, &style, &script);
    }

    fn notify(&mut self, surface: Surface, kind: ChangeKind) {
        let old_version = self.version;
        self.version += 1;
        let change = WorkspaceChange {
            surface,
            kind,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("active", &self.active)
            .field("version", &self.version)
            .field("preview_generation", &self.preview.generation())
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
