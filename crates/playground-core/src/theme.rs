//! Theme cycle and color palettes.
//!
//! The UI ships with a fixed set of themes. A single "next theme" action
//! advances through [`Theme::ALL`] and wraps after the last entry. Each theme
//! resolves to a [`Palette`] of RGB tokens; the front end maps tokens to its
//! own color type and restyles every surface on the same frame.

/// An RGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual theme identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Cyan-on-dark holographic look (the default).
    NeoHolo,
    /// Purple-tinted deep dark look.
    DarkQuantum,
    /// Amber-and-green retro terminal look.
    RetroGrid,
    /// Light, low-chrome look.
    MinimalLight,
}

impl Theme {
    /// Every theme, in cycle order.
    pub const ALL: [Theme; 4] = [
        Theme::NeoHolo,
        Theme::DarkQuantum,
        Theme::RetroGrid,
        Theme::MinimalLight,
    ];

    /// The theme following `self` in the cycle, wrapping after the last.
    pub fn next(self) -> Theme {
        match self {
            Theme::NeoHolo => Theme::DarkQuantum,
            Theme::DarkQuantum => Theme::RetroGrid,
            Theme::RetroGrid => Theme::MinimalLight,
            Theme::MinimalLight => Theme::NeoHolo,
        }
    }

    /// Human-readable label, used in status text and assistant notices.
    pub fn label(self) -> &'static str {
        match self {
            Theme::NeoHolo => "neo holo",
            Theme::DarkQuantum => "dark quantum",
            Theme::RetroGrid => "retro grid",
            Theme::MinimalLight => "minimal light",
        }
    }

    /// Resolve the color tokens for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::NeoHolo => Palette {
                background: Rgb::new(6, 10, 20),
                panel: Rgb::new(10, 16, 30),
                border: Rgb::new(0, 120, 140),
                title: Rgb::new(0, 240, 255),
                accent: Rgb::new(0, 240, 255),
                text: Rgb::new(208, 216, 240),
                muted: Rgb::new(90, 104, 136),
                fps: Rgb::new(0, 240, 255),
                memory: Rgb::new(40, 202, 66),
                cpu: Rgb::new(125, 0, 255),
                orb: Rgb::new(0, 240, 255),
            },
            Theme::DarkQuantum => Palette {
                background: Rgb::new(10, 6, 18),
                panel: Rgb::new(18, 12, 32),
                border: Rgb::new(96, 60, 160),
                title: Rgb::new(190, 140, 255),
                accent: Rgb::new(190, 140, 255),
                text: Rgb::new(222, 214, 240),
                muted: Rgb::new(110, 96, 140),
                fps: Rgb::new(190, 140, 255),
                memory: Rgb::new(80, 220, 160),
                cpu: Rgb::new(255, 110, 199),
                orb: Rgb::new(150, 80, 255),
            },
            Theme::RetroGrid => Palette {
                background: Rgb::new(8, 12, 8),
                panel: Rgb::new(14, 22, 14),
                border: Rgb::new(60, 140, 60),
                title: Rgb::new(255, 176, 0),
                accent: Rgb::new(255, 176, 0),
                text: Rgb::new(170, 255, 170),
                muted: Rgb::new(80, 130, 80),
                fps: Rgb::new(255, 176, 0),
                memory: Rgb::new(80, 255, 80),
                cpu: Rgb::new(255, 80, 80),
                orb: Rgb::new(255, 176, 0),
            },
            Theme::MinimalLight => Palette {
                background: Rgb::new(240, 242, 246),
                panel: Rgb::new(250, 250, 252),
                border: Rgb::new(150, 158, 170),
                title: Rgb::new(30, 50, 90),
                accent: Rgb::new(0, 90, 200),
                text: Rgb::new(30, 34, 44),
                muted: Rgb::new(130, 138, 150),
                fps: Rgb::new(0, 90, 200),
                memory: Rgb::new(20, 140, 60),
                cpu: Rgb::new(170, 40, 170),
                orb: Rgb::new(0, 90, 200),
            },
        }
    }
}

/// Color tokens resolved from a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background behind everything.
    pub background: Rgb,
    /// Panel body background.
    pub panel: Rgb,
    /// Panel border lines.
    pub border: Rgb,
    /// Panel titles and the top bar.
    pub title: Rgb,
    /// Highlights: focused pane border, key hints, the assistant bubble.
    pub accent: Rgb,
    /// Primary body text.
    pub text: Rgb,
    /// Secondary text (labels, hints, inactive titles).
    pub muted: Rgb,
    /// FPS chart stroke.
    pub fps: Rgb,
    /// Memory chart stroke.
    pub memory: Rgb,
    /// CPU chart stroke.
    pub cpu: Rgb,
    /// Central orb in the background scene.
    pub orb: Rgb,
}
