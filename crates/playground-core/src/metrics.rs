//! Simulated system metrics.
//!
//! Every tick appends one bounded random sample per metric to a fixed-length
//! rolling window. Windows are pre-filled with each metric's baseline so
//! charts render full width from the first frame, and appending always
//! evicts the oldest sample, so the window length never changes. Nothing
//! here reads real system state.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;
use std::ops::Range;

/// Samples kept per metric.
pub const WINDOW_LEN: usize = 20;

/// Identity of one simulated metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Frames per second.
    Fps,
    /// Memory usage percentage.
    Memory,
    /// CPU usage percentage.
    Cpu,
}

impl MetricKind {
    /// Every metric, in dashboard order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Fps, MetricKind::Memory, MetricKind::Cpu];

    /// Dashboard label.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Fps => "FPS",
            MetricKind::Memory => "MEM",
            MetricKind::Cpu => "CPU",
        }
    }

    /// Unit suffix for the paired numeric counter.
    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Fps => "",
            MetricKind::Memory => "%",
            MetricKind::Cpu => "%",
        }
    }

    /// Half-open range fresh samples are drawn from.
    pub fn range(self) -> Range<f64> {
        match self {
            MetricKind::Fps => 50.0..70.0,
            MetricKind::Memory => 30.0..70.0,
            MetricKind::Cpu => 10.0..40.0,
        }
    }

    /// Pre-fill value used before the first tick.
    pub fn baseline(self) -> f64 {
        match self {
            MetricKind::Fps => 60.0,
            MetricKind::Memory => 40.0,
            MetricKind::Cpu => 20.0,
        }
    }

    /// Chart y-axis maximum.
    pub fn chart_max(self) -> f64 {
        match self {
            MetricKind::Fps => 120.0,
            MetricKind::Memory => 100.0,
            MetricKind::Cpu => 100.0,
        }
    }
}

/// Generator and rolling-window store for the three simulated metrics.
pub struct MetricsSimulator {
    fps: VecDeque<f64>,
    memory: VecDeque<f64>,
    cpu: VecDeque<f64>,
    rng: SmallRng,
    ticks: u64,
}

impl MetricsSimulator {
    /// Create a simulator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Create a simulator with a fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        let prefill = |kind: MetricKind| {
            std::iter::repeat(kind.baseline())
                .take(WINDOW_LEN)
                .collect::<VecDeque<f64>>()
        };
        Self {
            fps: prefill(MetricKind::Fps),
            memory: prefill(MetricKind::Memory),
            cpu: prefill(MetricKind::Cpu),
            rng,
            ticks: 0,
        }
    }

    /// Append one fresh sample per metric, evicting the oldest.
    pub fn tick(&mut self) {
        self.ticks += 1;
        for kind in MetricKind::ALL {
            let sample = self.rng.gen_range(kind.range());
            let window = self.window_mut(kind);
            window.push_back(sample);
            while window.len() > WINDOW_LEN {
                window.pop_front();
            }
        }
    }

    /// The rolling window for `kind`, oldest first.
    pub fn window(&self, kind: MetricKind) -> &VecDeque<f64> {
        match kind {
            MetricKind::Fps => &self.fps,
            MetricKind::Memory => &self.memory,
            MetricKind::Cpu => &self.cpu,
        }
    }

    /// The most recent sample for `kind` (the baseline before any tick).
    pub fn latest(&self, kind: MetricKind) -> f64 {
        self.window(kind).back().copied().unwrap_or(kind.baseline())
    }

    /// How many ticks have run.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    fn window_mut(&mut self, kind: MetricKind) -> &mut VecDeque<f64> {
        match kind {
            MetricKind::Fps => &mut self.fps,
            MetricKind::Memory => &mut self.memory,
            MetricKind::Cpu => &mut self.cpu,
        }
    }
}

impl Default for MetricsSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MetricsSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsSimulator")
            .field("ticks", &self.ticks)
            .field("fps", &self.latest(MetricKind::Fps))
            .field("memory", &self.latest(MetricKind::Memory))
            .field("cpu", &self.latest(MetricKind::Cpu))
            .finish()
    }
}
