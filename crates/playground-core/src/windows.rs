//! Floating-panel window manager.
//!
//! # Overview
//!
//! Tracks position, z-rank, and drag state for a registered set of floating
//! panels. The drag state machine per panel is Idle → Dragging → Idle:
//!
//! - **Idle → Dragging**: a pointer-down lands on a panel's header band
//!   (excluding its trailing control cells). The manager captures the grab
//!   offset (pointer minus panel origin), resets every panel's z-rank to
//!   [`Z_BASELINE`], and raises the grabbed panel to [`Z_RAISED`] — bring to
//!   front is global, not incremental.
//! - **Dragging**: every pointer-move recomputes the panel origin absolutely
//!   as `pointer - grab`. No incremental deltas, so intermediate moves can
//!   never accumulate drift.
//! - **Dragging → Idle**: any pointer-up ends the drag, wherever the pointer
//!   is. A drag cannot get stuck when the pointer leaves the panel.
//!
//! At most one panel may be dragging at any instant: a pointer-down while a
//! drag is active is ignored.
//!
//! # Example
//!
//! ```rust
//! use playground_core::{PanelId, PointerHit, Rect, WindowManager};
//!
//! let mut manager = WindowManager::new([(PanelId::Editors, Rect::new(0, 0, 40, 12))]);
//!
//! assert_eq!(
//!     manager.pointer_down(5, 0),
//!     PointerHit::DragStarted(PanelId::Editors)
//! );
//! manager.pointer_move(15, 6);
//! manager.pointer_up();
//!
//! let frame = manager.frame(PanelId::Editors).unwrap();
//! assert_eq!((frame.x, frame.y), (10, 6));
//! ```

/// Z-rank every panel is reset to when a drag starts.
pub const Z_BASELINE: u16 = 1;
/// Z-rank of the panel being dragged (and of the most recently dragged).
pub const Z_RAISED: u16 = 10;

/// Identity of one floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// The three-surface code editor panel.
    Editors,
    /// The composed-document preview panel.
    Preview,
    /// The metrics dashboard panel.
    Metrics,
    /// The console panel.
    Console,
}

impl PanelId {
    /// Every panel, in default paint order (back to front on equal rank).
    pub const ALL: [PanelId; 4] = [
        PanelId::Editors,
        PanelId::Preview,
        PanelId::Metrics,
        PanelId::Console,
    ];

    /// Header title.
    pub fn label(self) -> &'static str {
        match self {
            PanelId::Editors => "CODE EDITORS",
            PanelId::Preview => "LIVE PREVIEW",
            PanelId::Metrics => "SYSTEM METRICS",
            PanelId::Console => "CONSOLE",
        }
    }
}

/// A rectangle in screen cells. `x`/`y` may go negative while a panel is
/// dragged toward the top-left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Window manager errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Panel is not registered with this manager
    UnknownPanel(PanelId),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::UnknownPanel(id) => {
                write!(f, "Unknown panel: {}", id.label())
            }
        }
    }
}

impl std::error::Error for WindowError {}

/// Per-panel position and stacking state.
#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    /// Layout-assigned rectangle before any dragging.
    pub base: Rect,
    /// Accumulated drag translation applied on top of `base`.
    pub offset: (i32, i32),
    /// Current z-rank; higher paints on top.
    pub z: u16,
    /// Whether this panel is currently being dragged.
    pub dragging: bool,
    /// Trailing header cells excluded from drag starts (window controls).
    pub header_controls: u16,
}

impl PanelState {
    fn new(base: Rect) -> Self {
        Self {
            base,
            offset: (0, 0),
            z: Z_BASELINE,
            dragging: false,
            header_controls: 0,
        }
    }

    /// The on-screen rectangle: `base` translated by `offset`.
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.base.x + self.offset.0,
            self.base.y + self.offset.1,
            self.base.width,
            self.base.height,
        )
    }

    /// The draggable header band: the frame's top row minus any trailing
    /// control cells.
    pub fn header(&self) -> Rect {
        let frame = self.frame();
        let width = frame.width.saturating_sub(self.header_controls);
        Rect::new(frame.x, frame.y, width, 1.min(frame.height))
    }
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    panel: PanelId,
    grab: (i32, i32),
}

/// Outcome of routing a pointer-down through the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerHit {
    /// The pointer grabbed a header and a drag began.
    DragStarted(PanelId),
    /// The pointer landed on a panel's body or control cells.
    Panel(PanelId),
    /// The pointer hit no panel.
    Miss,
}

/// Tracks every registered panel plus the single active drag.
#[derive(Debug)]
pub struct WindowManager {
    panels: Vec<(PanelId, PanelState)>,
    drag: Option<DragState>,
    bounds: Option<Rect>,
}

impl WindowManager {
    /// Register panels with their layout rectangles. Registration order is
    /// the paint order among panels of equal rank.
    pub fn new(layout: impl IntoIterator<Item = (PanelId, Rect)>) -> Self {
        Self {
            panels: layout
                .into_iter()
                .map(|(id, base)| (id, PanelState::new(base)))
                .collect(),
            drag: None,
            bounds: None,
        }
    }

    /// Constrain dragged panels to stay inside `bounds`. Without bounds,
    /// panel origins follow the pointer math unclamped.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Look up a panel's state.
    pub fn panel(&self, id: PanelId) -> Result<&PanelState, WindowError> {
        self.panels
            .iter()
            .find(|(panel_id, _)| *panel_id == id)
            .map(|(_, state)| state)
            .ok_or(WindowError::UnknownPanel(id))
    }

    /// A panel's current on-screen rectangle.
    pub fn frame(&self, id: PanelId) -> Result<Rect, WindowError> {
        Ok(self.panel(id)?.frame())
    }

    /// Rebase a panel after a layout change, keeping its drag translation.
    pub fn set_base(&mut self, id: PanelId, base: Rect) -> Result<(), WindowError> {
        self.panel_entry_mut(id)?.base = base;
        Ok(())
    }

    /// Reserve trailing header cells (window controls) that never start a
    /// drag.
    pub fn set_header_controls(&mut self, id: PanelId, cells: u16) -> Result<(), WindowError> {
        self.panel_entry_mut(id)?.header_controls = cells;
        Ok(())
    }

    /// The panel currently being dragged, if any.
    pub fn dragging(&self) -> Option<PanelId> {
        self.drag.map(|drag| drag.panel)
    }

    /// Panel ids sorted back to front for painting.
    pub fn panels_back_to_front(&self) -> Vec<PanelId> {
        let mut order: Vec<(PanelId, u16)> = self
            .panels
            .iter()
            .map(|(id, state)| (*id, state.z))
            .collect();
        order.sort_by_key(|(_, z)| *z);
        order.into_iter().map(|(id, _)| id).collect()
    }

    /// Route a pointer-down. A header hit starts a drag; a body hit reports
    /// the panel for the caller to focus; anything else is a miss. While a
    /// drag is already active every pointer-down is ignored, which rejects a
    /// second concurrent drag start. Panels are tested topmost first, so a
    /// panel body obscuring another panel's header blocks the grab.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> PointerHit {
        if self.drag.is_some() {
            return PointerHit::Miss;
        }
        for id in self.panels_back_to_front().into_iter().rev() {
            let Ok(state) = self.panel(id).map(|state| *state) else {
                continue;
            };
            if !state.frame().contains(x, y) {
                continue;
            }
            if state.header().contains(x, y) {
                let frame = state.frame();
                self.drag = Some(DragState {
                    panel: id,
                    grab: (x - frame.x, y - frame.y),
                });
                for (panel_id, state) in &mut self.panels {
                    state.dragging = *panel_id == id;
                    state.z = if *panel_id == id { Z_RAISED } else { Z_BASELINE };
                }
                return PointerHit::DragStarted(id);
            }
            return PointerHit::Panel(id);
        }
        PointerHit::Miss
    }

    /// Route a pointer-move. While a drag is active the dragged panel's
    /// origin is recomputed absolutely from the grab offset. Returns whether
    /// a panel moved.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let bounds = self.bounds;
        let Ok(state) = self.panel_entry_mut(drag.panel) else {
            return false;
        };
        let mut origin = (x - drag.grab.0, y - drag.grab.1);
        if let Some(bounds) = bounds {
            origin.0 = origin
                .0
                .min(bounds.right() - state.base.width as i32)
                .max(bounds.x);
            origin.1 = origin
                .1
                .min(bounds.bottom() - state.base.height as i32)
                .max(bounds.y);
        }
        let offset = (origin.0 - state.base.x, origin.1 - state.base.y);
        if offset == state.offset {
            return false;
        }
        state.offset = offset;
        true
    }

    /// Route a pointer-up: ends the active drag regardless of pointer
    /// position. Returns the panel whose drag ended.
    pub fn pointer_up(&mut self) -> Option<PanelId> {
        let drag = self.drag.take()?;
        if let Ok(state) = self.panel_entry_mut(drag.panel) {
            state.dragging = false;
        }
        Some(drag.panel)
    }

    fn panel_entry_mut(&mut self, id: PanelId) -> Result<&mut PanelState, WindowError> {
        self.panels
            .iter_mut()
            .find(|(panel_id, _)| *panel_id == id)
            .map(|(_, state)| state)
            .ok_or(WindowError::UnknownPanel(id))
    }
}
