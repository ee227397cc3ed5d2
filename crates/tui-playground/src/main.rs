//! Terminal live code playground
//!
//! A single-screen demo built with crossterm and ratatui: three coordinated
//! editors (HTML / CSS / JS) composed into a live preview document, floating
//! draggable panels, a simulated metrics dashboard, a canned AI assistant,
//! and a decorative particle field behind everything. All intelligence is
//! simulated; nothing is executed, collected, or sent anywhere.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-playground
//! cargo run -p tui-playground -- page.html page.css page.js
//! ```
//!
//! Optional positional paths seed the markup, style, and script editors.
//! Without them the built-in sample snippets are loaded.
//!
//! # Keys
//!
//! - Arrow keys / Home / End: move the cursor in the active editor
//! - Typing / Enter / Tab / Backspace / Delete: edit the active buffer
//! - Ctrl+E: cycle the active editor (HTML → CSS → JS)
//! - Ctrl+T: next theme
//! - Ctrl+G: export the workspace (demo stub)
//! - Ctrl+A: toggle the assistant message
//! - Esc: dismiss the assistant message
//! - Ctrl+Q: quit
//!
//! # Mouse
//!
//! Drag a panel header to move the panel; the dragged panel is raised above
//! the others. Click inside an editor pane to focus it. Click the orb in the
//! bottom-right corner to toggle the assistant; click the bubble's `[x]` to
//! dismiss it. A message under the pointer when its hide timer fires stays
//! visible.
//!
//! # Logging
//!
//! Set `PLAYGROUND_LOG=<file>` to append `tracing` output to a file. Nothing
//! is ever written to stderr while the alternate screen is active.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use playground_core::{
    Assistant, Command, CursorCommand, EXPORT_COMPLETE, EXPORT_STARTED, EditCommand, MetricKind,
    MetricsSimulator, PanelId, PointerHit, Rect as PanelRect, Rgb, SceneState, Surface, Theme,
    WindowManager, Workspace,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Sparkline, Wrap,
        canvas::{Canvas, Circle, Points},
    },
};
use std::{
    env, fs,
    io::{self, stdout},
    process,
    time::{Duration, Instant},
};

/// Event poll timeout; one scene frame per expiry.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);
/// Cadence of the metrics simulator.
const METRICS_PERIOD: Duration = Duration::from_secs(1);
/// Console cursor blink half-period.
const BLINK_PERIOD: Duration = Duration::from_millis(500);
/// Delay between the export-started and export-complete notices.
const EXPORT_DELAY: Duration = Duration::from_millis(1500);
/// Particles in the background field.
const PARTICLE_COUNT: usize = 320;

/// Markup loaded when no seed file is given.
const SAMPLE_MARKUP: &str = r#"<div class="nexus">
  <h1>Quantum Nexus</h1>
  <p>Edit any pane and the preview recomposes.</p>
  <button id="collapse">Collapse state</button>
</div>
"#;

/// Style loaded when no seed file is given.
const SAMPLE_STYLE: &str = r#".nexus {
  color: #00f0ff;
  text-align: center;
  font-family: monospace;
}
"#;

/// Script loaded when no seed file is given.
const SAMPLE_SCRIPT: &str = r#"const nexus = document.querySelector(".nexus");
document.getElementById("collapse").addEventListener("click", () => {
  nexus.classList.toggle("collapsed");
  console.log("quantum state collapsed");
});
"#;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Clip a panel frame to the screen, converting to terminal coordinates.
/// Returns `None` when nothing of the panel is visible.
fn clip_to_screen(frame: PanelRect, screen: Rect) -> Option<Rect> {
    let sx = screen.x as i32;
    let sy = screen.y as i32;
    let x0 = frame.x.max(sx);
    let y0 = frame.y.max(sy);
    let x1 = frame.right().min(sx + screen.width as i32);
    let y1 = frame.bottom().min(sy + screen.height as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(
        x0 as u16,
        y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

/// Layout-assigned base rectangles for the four panels: editors tall on the
/// left with the console below, preview and metrics stacked on the right.
fn panel_bases(interior: Rect) -> [(PanelId, PanelRect); 4] {
    let ix = interior.x as i32;
    let iy = interior.y as i32;
    let iw = interior.width as i32;
    let ih = interior.height as i32;

    let editors_w = iw * 11 / 20;
    let editors_h = ih * 3 / 5;
    let right_x = ix + editors_w + 2;
    let right_w = (iw - editors_w - 3).max(0);
    let preview_h = ih * 2 / 5;

    let rect = |x: i32, y: i32, w: i32, h: i32| PanelRect::new(x, y, w.max(0) as u16, h.max(0) as u16);

    [
        (PanelId::Editors, rect(ix + 1, iy, editors_w, editors_h)),
        (
            PanelId::Console,
            rect(ix + 1, iy + editors_h + 1, editors_w, ih - editors_h - 1),
        ),
        (PanelId::Preview, rect(right_x, iy, right_w, preview_h)),
        (
            PanelId::Metrics,
            rect(right_x, iy + preview_h + 1, right_w, ih - preview_h - 1),
        ),
    ]
}

struct App {
    /// The three editor buffers plus the composed preview
    workspace: Workspace,
    /// Floating panel positions, z-ranks, and the active drag
    windows: WindowManager,
    /// Simulated FPS / memory / CPU rolling windows
    metrics: MetricsSimulator,
    /// The canned assistant and its timers
    assistant: Assistant,
    /// Active visual theme
    theme: Theme,
    /// Decorative particle field
    scene: SceneState,
    /// Whether the main loop should exit
    should_quit: bool,
    /// Status line override; empty shows the default summary
    status_message: String,
    /// Last metrics tick
    last_metrics: Instant,
    /// Last console cursor blink toggle
    last_blink: Instant,
    /// Console prompt cursor phase
    console_cursor_visible: bool,
    /// Deadline of a pending export completion notice
    export_done_at: Option<Instant>,
    /// Terminal size the panel bases were computed for
    layout_size: (u16, u16),
    /// Editor pane rectangles from the last frame (click-to-focus)
    pane_hits: Vec<(Surface, Rect)>,
    /// Orb rectangle from the last frame
    orb_hit: Option<Rect>,
    /// Assistant bubble rectangle from the last frame
    bubble_hit: Option<Rect>,
    /// Bubble close control rectangle from the last frame
    close_hit: Option<Rect>,
    /// Terminal cursor cell requested by the active editor pane
    cursor_cell: Option<(u16, u16)>,
}

impl App {
    fn new(markup: &str, style: &str, script: &str, now: Instant) -> Self {
        let mut workspace = Workspace::new(markup, style, script);
        workspace.subscribe(|change| {
            tracing::trace!(
                surface = change.surface.label(),
                kind = ?change.kind,
                version = change.new_version,
                "workspace change"
            );
        });

        // Real bases arrive from the first frame's layout pass.
        let windows =
            WindowManager::new(PanelId::ALL.map(|id| (id, PanelRect::new(0, 0, 0, 0))));

        Self {
            workspace,
            windows,
            metrics: MetricsSimulator::new(),
            assistant: Assistant::new(now),
            theme: Theme::NeoHolo,
            scene: SceneState::new(PARTICLE_COUNT),
            should_quit: false,
            status_message: String::new(),
            last_metrics: now,
            last_blink: now,
            console_cursor_visible: true,
            export_done_at: None,
            layout_size: (0, 0),
            pane_hits: Vec::new(),
            orb_hit: None,
            bubble_hit: None,
            close_hit: None,
            cursor_cell: None,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let now = Instant::now();

        match (key.modifiers, key.code) {
            // Ctrl+Q: quit
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                self.should_quit = true;
            }

            // Ctrl+E: cycle the active editor surface
            (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                let surface = self.workspace.cycle_active();
                self.status_message = format!("Active editor: {}", surface.label());
            }

            // Ctrl+T: next theme
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
                self.cycle_theme(now);
            }

            // Ctrl+G: export stub
            (KeyModifiers::CONTROL, KeyCode::Char('g')) => {
                self.start_export(now);
            }

            // Ctrl+A: toggle the assistant
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.assistant.toggle(now);
            }

            // Esc: dismiss the assistant message
            (_, KeyCode::Esc) => {
                self.assistant.dismiss();
            }

            // Cursor motion
            (_, KeyCode::Left) => self.cursor(CursorCommand::MoveLeft),
            (_, KeyCode::Right) => self.cursor(CursorCommand::MoveRight),
            (_, KeyCode::Up) => self.cursor(CursorCommand::MoveUp),
            (_, KeyCode::Down) => self.cursor(CursorCommand::MoveDown),
            (_, KeyCode::Home) => self.cursor(CursorCommand::MoveLineStart),
            (_, KeyCode::End) => self.cursor(CursorCommand::MoveLineEnd),

            // Editing
            (_, KeyCode::Backspace) => self.edit(EditCommand::Backspace),
            (_, KeyCode::Delete) => self.edit(EditCommand::DeleteForward),
            (_, KeyCode::Enter) => self.edit(EditCommand::InsertNewline),
            (_, KeyCode::Tab) => self.edit(EditCommand::InsertTab),
            (_, KeyCode::Char(ch)) => self.edit(EditCommand::InsertChar { ch }),

            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let x = mouse.column;
        let y = mouse.row;

        // Hover only matters at the instant the hide deadline fires; keeping
        // it current on every pointer event is enough.
        let hovering = self
            .bubble_hit
            .map(|rect| rect_contains(rect, x, y))
            .unwrap_or(false);
        self.assistant.set_hovering(hovering);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let now = Instant::now();

                if let Some(rect) = self.close_hit
                    && rect_contains(rect, x, y)
                {
                    self.assistant.dismiss();
                    return;
                }
                if let Some(rect) = self.orb_hit
                    && rect_contains(rect, x, y)
                {
                    self.assistant.toggle(now);
                    return;
                }
                if let Some(rect) = self.bubble_hit
                    && rect_contains(rect, x, y)
                {
                    return;
                }

                match self.windows.pointer_down(x as i32, y as i32) {
                    PointerHit::DragStarted(id) => {
                        tracing::debug!(panel = id.label(), "drag started");
                    }
                    PointerHit::Panel(PanelId::Editors) => {
                        let hit = self
                            .pane_hits
                            .iter()
                            .find(|(_, rect)| rect_contains(*rect, x, y))
                            .map(|(surface, _)| *surface);
                        if let Some(surface) = hit {
                            self.workspace.set_active(surface);
                            self.status_message =
                                format!("Active editor: {}", surface.label());
                        }
                    }
                    PointerHit::Panel(_) | PointerHit::Miss => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.windows.pointer_move(x as i32, y as i32);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(id) = self.windows.pointer_up() {
                    tracing::debug!(panel = id.label(), "drag ended");
                }
            }
            _ => {}
        }
    }

    /// Timer pass, run after every poll expiry or handled event.
    fn tick(&mut self) {
        let now = Instant::now();

        self.scene.step();

        if now.duration_since(self.last_metrics) >= METRICS_PERIOD {
            self.metrics.tick();
            self.last_metrics = now;
        }

        if now.duration_since(self.last_blink) >= BLINK_PERIOD {
            self.console_cursor_visible = !self.console_cursor_visible;
            self.last_blink = now;
        }

        if let Some(done_at) = self.export_done_at
            && done_at <= now
        {
            self.export_done_at = None;
            self.assistant.show(EXPORT_COMPLETE, now);
            tracing::info!("export complete");
        }

        self.assistant.poll(now);
    }

    fn cycle_theme(&mut self, now: Instant) {
        self.theme = self.theme.next();
        self.assistant
            .show(format!("Switched to {} theme.", self.theme.label()), now);
        tracing::info!(theme = self.theme.label(), "theme switched");
    }

    fn start_export(&mut self, now: Instant) {
        self.assistant.show(EXPORT_STARTED, now);
        self.export_done_at = Some(now + EXPORT_DELAY);
        tracing::info!("export requested");
    }

    fn cursor(&mut self, command: CursorCommand) {
        if let Err(err) = self.workspace.execute_active(Command::Cursor(command)) {
            self.status_message = err.to_string();
        }
    }

    fn edit(&mut self, command: EditCommand) {
        if let Err(err) = self.workspace.execute_active(Command::Edit(command)) {
            self.status_message = err.to_string();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let palette = self.theme.palette();
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // top bar
                Constraint::Min(1),    // floating panels over the scene
                Constraint::Length(1), // status line
                Constraint::Length(1), // shortcut hints
            ])
            .split(size);
        let interior = chunks[1];

        // Rebase panels when the terminal size changes, keeping any drag
        // offsets the user has accumulated.
        if self.layout_size != (size.width, size.height) {
            self.layout_size = (size.width, size.height);
            for (id, base) in panel_bases(interior) {
                let _ = self.windows.set_base(id, base);
            }
            self.windows.set_bounds(PanelRect::new(
                interior.x as i32,
                interior.y as i32,
                interior.width,
                interior.height,
            ));
        }

        frame.render_widget(
            Block::default().style(Style::default().bg(to_color(palette.background))),
            size,
        );

        self.render_top_bar(frame, chunks[0]);
        self.render_scene(frame, interior);

        self.cursor_cell = None;
        self.pane_hits.clear();
        let paint_order = self.windows.panels_back_to_front();
        for &id in &paint_order {
            let Ok(panel_frame) = self.windows.frame(id) else {
                continue;
            };
            let Some(area) = clip_to_screen(panel_frame, interior) else {
                continue;
            };
            if area.width < 4 || area.height < 3 {
                continue;
            }
            frame.render_widget(Clear, area);
            match id {
                PanelId::Editors => self.render_editors(frame, area),
                PanelId::Preview => self.render_preview(frame, area),
                PanelId::Metrics => self.render_metrics(frame, area),
                PanelId::Console => self.render_console(frame, area),
            }
        }

        self.render_orb(frame, interior);
        self.render_bubble(frame, interior);

        self.render_status_line(frame, chunks[2]);
        self.render_shortcuts(frame, chunks[3]);

        // Place the terminal cursor in the active pane unless a panel painted
        // later (or an overlay) covers that cell.
        if let Some((cx, cy)) = self.cursor_cell {
            let editors_rank = paint_order
                .iter()
                .position(|&id| id == PanelId::Editors)
                .unwrap_or(0);
            let covered_by_panel = paint_order[editors_rank + 1..].iter().any(|&id| {
                self.windows
                    .frame(id)
                    .ok()
                    .and_then(|f| clip_to_screen(f, interior))
                    .map(|rect| rect_contains(rect, cx, cy))
                    .unwrap_or(false)
            });
            let covered_by_overlay = [self.orb_hit, self.bubble_hit]
                .iter()
                .flatten()
                .any(|rect| rect_contains(*rect, cx, cy));
            if !covered_by_panel && !covered_by_overlay {
                frame.set_cursor_position((cx, cy));
            }
        }
    }

    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(24)])
            .split(area);

        let title = Line::from(vec![
            Span::styled(
                " QUANTUM PLAYGROUND ",
                Style::default()
                    .fg(to_color(palette.title))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "markup / style / script composed live",
                Style::default().fg(to_color(palette.muted)),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).style(Style::default().bg(to_color(palette.panel))),
            bar[0],
        );

        let theme_tag = Paragraph::new(format!(" theme: {} ", self.theme.label()))
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .bg(to_color(palette.panel))
                    .fg(to_color(palette.accent)),
            );
        frame.render_widget(theme_tag, bar[1]);
    }

    fn render_scene(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let points: Vec<_> = self.scene.projected().collect();
        let orb = self.scene.orb();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(palette.background))
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for point in &points {
                    ctx.draw(&Points {
                        coords: &[(point.x, point.y)],
                        color: to_color(point.color),
                    });
                }
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: orb.radius,
                    color: to_color(palette.orb),
                });
            });
        frame.render_widget(canvas, area);
    }

    fn panel_block(&self, id: PanelId) -> Block<'_> {
        let palette = self.theme.palette();
        let dragging = self.windows.dragging() == Some(id);
        let border = if dragging {
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(palette.border))
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", id.label()))
            .title_style(
                Style::default()
                    .fg(to_color(palette.title))
                    .add_modifier(Modifier::BOLD),
            )
            .style(
                Style::default()
                    .bg(to_color(palette.panel))
                    .fg(to_color(palette.text)),
            )
    }

    fn render_editors(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block(PanelId::Editors);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 3 || inner.width < 4 {
            return;
        }

        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);

        for (surface, pane) in Surface::ALL.into_iter().zip(panes.iter().copied()) {
            self.pane_hits.push((surface, pane));
            self.render_pane(frame, pane, surface);
        }
    }

    fn render_pane(&mut self, frame: &mut Frame, area: Rect, surface: Surface) {
        let palette = self.theme.palette();
        let active = self.workspace.active_surface() == surface;
        let border = if active {
            Style::default().fg(to_color(palette.accent))
        } else {
            Style::default().fg(to_color(palette.muted))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", surface.label()))
            .title_style(border.add_modifier(Modifier::BOLD));
        let content = block.inner(area);
        frame.render_widget(block, area);
        if content.height == 0 || content.width == 0 {
            return;
        }

        let buffer = self.workspace.buffer(surface);
        let cursor = buffer.cursor();
        let visual_x = buffer.cursor_visual_x();
        let height = content.height as usize;
        let width = content.width as usize;

        // Keep the cursor row and column of the active pane in view. The
        // horizontal skip is char-based; it matches the display column for
        // everything narrower than a wide glyph.
        let scroll_top = if active && cursor.line + 1 > height {
            cursor.line + 1 - height
        } else {
            0
        };
        let scroll_left = if active && visual_x + 1 > width {
            visual_x + 1 - width
        } else {
            0
        };

        let text_style = Style::default().fg(to_color(palette.text));
        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            let Some(line) = buffer.line(scroll_top + row) else {
                break;
            };
            let visible: String = line.chars().skip(scroll_left).take(width).collect();
            lines.push(Line::styled(visible, text_style));
        }
        frame.render_widget(Paragraph::new(lines), content);

        if active {
            let cx = content.x + (visual_x - scroll_left).min(width - 1) as u16;
            let cy = content.y + (cursor.line - scroll_top).min(height - 1) as u16;
            self.cursor_cell = Some((cx, cy));
        }
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let block = self.panel_block(PanelId::Preview);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let preview = self.workspace.preview();
        let lines: Vec<Line> = preview
            .text()
            .lines()
            .take(inner.height as usize)
            .map(|line| Line::styled(line.to_string(), Style::default().fg(to_color(palette.text))))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let block = self.panel_block(PanelId::Metrics);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 || inner.width < 8 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);

        for (kind, row) in MetricKind::ALL.into_iter().zip(rows.iter().copied()) {
            if row.height == 0 {
                continue;
            }
            let stroke = match kind {
                MetricKind::Fps => palette.fps,
                MetricKind::Memory => palette.memory,
                MetricKind::Cpu => palette.cpu,
            };
            let label = Line::from(vec![
                Span::styled(
                    format!("{:<4}", kind.label()),
                    Style::default()
                        .fg(to_color(stroke))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}{}", self.metrics.latest(kind).round(), kind.unit()),
                    Style::default().fg(to_color(palette.text)),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(label),
                Rect::new(row.x, row.y, row.width, 1),
            );

            if row.height > 1 {
                let samples: Vec<u64> = self
                    .metrics
                    .window(kind)
                    .iter()
                    .map(|value| value.round() as u64)
                    .collect();
                let chart = Sparkline::default()
                    .data(&samples)
                    .max(kind.chart_max() as u64)
                    .style(Style::default().fg(to_color(stroke)));
                frame.render_widget(
                    chart,
                    Rect::new(row.x, row.y + 1, row.width, row.height - 1),
                );
            }
        }
    }

    fn render_console(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let block = self.panel_block(PanelId::Console);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let muted = Style::default().fg(to_color(palette.muted));
        let accent = Style::default().fg(to_color(palette.accent));
        let mut lines = vec![
            Line::styled("> quantum kernel initialized", muted),
            Line::styled(
                format!("> preview pipeline online (gen {})", self.workspace.preview().generation()),
                muted,
            ),
            Line::styled("> awaiting input...", muted),
        ];
        let cursor = if self.console_cursor_visible { "█" } else { " " };
        lines.push(Line::from(vec![
            Span::styled("$ ", accent),
            Span::styled(cursor, accent),
        ]));
        let skip = lines.len().saturating_sub(inner.height as usize);
        frame.render_widget(Paragraph::new(lines.split_off(skip)), inner);
    }

    fn render_orb(&mut self, frame: &mut Frame, interior: Rect) {
        if interior.width < 8 || interior.height < 5 {
            self.orb_hit = None;
            return;
        }
        let palette = self.theme.palette();
        let area = Rect::new(
            interior.x + interior.width - 6,
            interior.y + interior.height - 3,
            5,
            3,
        );
        frame.render_widget(Clear, area);
        let border = if self.assistant.is_visible() {
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(palette.border))
        };
        let orb = Paragraph::new("◉")
            .alignment(Alignment::Center)
            .style(Style::default().fg(to_color(palette.orb)).bg(to_color(palette.panel)))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(orb, area);
        self.orb_hit = Some(area);
    }

    fn render_bubble(&mut self, frame: &mut Frame, interior: Rect) {
        let Some(message) = self.assistant.message().map(str::to_owned) else {
            self.bubble_hit = None;
            self.close_hit = None;
            return;
        };
        let palette = self.theme.palette();

        let width = 42.min(interior.width.saturating_sub(4));
        if width < 12 || interior.height < 8 {
            self.bubble_hit = None;
            self.close_hit = None;
            return;
        }
        let text_width = (width - 2) as usize;
        let text_lines = message.len().div_ceil(text_width).min(5) as u16;
        let height = text_lines + 2;

        let orb_top = self
            .orb_hit
            .map(|rect| rect.y)
            .unwrap_or(interior.y + interior.height);
        let x = interior.x + interior.width - width - 2;
        let y = orb_top.saturating_sub(height).max(interior.y);
        let area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, area);
        let bubble = Paragraph::new(message)
            .wrap(Wrap { trim: false })
            .style(
                Style::default()
                    .bg(to_color(palette.panel))
                    .fg(to_color(palette.text)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(to_color(palette.accent)))
                    .title(" AI ASSISTANT ")
                    .title_style(
                        Style::default()
                            .fg(to_color(palette.accent))
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(bubble, area);

        let close = Rect::new(area.x + area.width - 4, area.y, 3, 1);
        frame.render_widget(
            Paragraph::new("[x]").style(
                Style::default()
                    .bg(to_color(palette.panel))
                    .fg(to_color(palette.accent)),
            ),
            close,
        );

        self.bubble_hit = Some(area);
        self.close_hit = Some(close);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let surface = self.workspace.active_surface();
            let buffer = self.workspace.buffer(surface);
            let cursor = buffer.cursor();
            format!(
                "{} | Ln {}, Col {} | {} lines, {} chars | preview gen {} | v{}",
                surface.label(),
                cursor.line + 1,
                cursor.column + 1,
                buffer.line_count(),
                buffer.char_count(),
                self.workspace.preview().generation(),
                self.workspace.version(),
            )
        };

        let status_line = Paragraph::new(status_text).style(
            Style::default()
                .bg(to_color(palette.panel))
                .fg(to_color(palette.text))
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status_line, area);
    }

    fn render_shortcuts(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let shortcuts = "Ctrl+E: editor  Ctrl+T: theme  Ctrl+G: export  Ctrl+A: assistant  \
                         Esc: dismiss  Ctrl+Q: quit  (drag panel headers to move)";
        let shortcuts_line = Paragraph::new(shortcuts).style(
            Style::default()
                .bg(to_color(palette.accent))
                .fg(to_color(palette.background)),
        );
        frame.render_widget(shortcuts_line, area);
    }
}

fn print_usage(program: &str) {
    println!("Usage: {program} [MARKUP] [STYLE] [SCRIPT]");
    println!();
    println!("Optional positional paths seed the HTML, CSS, and JS editors.");
    println!("Without arguments the built-in sample snippets are loaded.");
    println!();
    println!("Options:");
    println!("  -h, --help     print this help and exit");
    println!("  -V, --version  print the version and exit");
    println!();
    println!("Environment:");
    println!("  PLAYGROUND_LOG=<file>  append tracing output to <file>");
}

/// File-based tracing, enabled only by `PLAYGROUND_LOG`. stderr would corrupt
/// the alternate screen, so without the variable logging stays off.
fn init_tracing() {
    use std::fs::OpenOptions;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let Ok(path) = env::var("PLAYGROUND_LOG") else {
        return;
    };
    if path.is_empty() {
        return;
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("warning: cannot open log file {path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tui_playground=debug,playground_core=debug,info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = %path, "tracing initialized");
}

/// Read the seed files named on the command line, falling back to the built-in
/// samples for omitted positions. Unreadable paths abort before the terminal
/// is touched.
fn load_seeds(paths: &[String]) -> [String; 3] {
    let samples = [SAMPLE_MARKUP, SAMPLE_STYLE, SAMPLE_SCRIPT];
    let mut seeds = samples.map(str::to_owned);
    for (i, path) in paths.iter().enumerate() {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::info!(path = %path, surface = Surface::ALL[i].label(), "seed loaded");
                seeds[i] = text;
            }
            Err(err) => {
                eprintln!("error: cannot read {path}: {err}");
                process::exit(1);
            }
        }
    }
    seeds
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut paths: Vec<String> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("tui-playground {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("error: unknown option {other}");
                eprintln!("Usage: {} [MARKUP] [STYLE] [SCRIPT]", args[0]);
                process::exit(2);
            }
            _ => paths.push(arg.clone()),
        }
    }
    if paths.len() > 3 {
        eprintln!("error: at most three seed paths are accepted");
        eprintln!("Usage: {} [MARKUP] [STYLE] [SCRIPT]", args[0]);
        process::exit(2);
    }

    init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting tui-playground");

    let [markup, style, script] = load_seeds(&paths);

    // Set up the terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&markup, &style, &script, Instant::now());

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");

    if let Err(err) = result {
        eprintln!("error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse_event(mouse);
                }
                Event::Resize(_, _) => {
                    // The next render pass rebases the panels.
                }
                _ => {}
            }
        }

        app.tick();
    }

    Ok(())
}
