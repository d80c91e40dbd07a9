use std::time::Duration;

// Shared simulation/render tuning constants used by the engine and the native host.

// Physics
pub const GRAVITY: f32 = 300.0; // downward acceleration in px/s²
pub const DRAG_PER_TICK: f32 = 0.98; // velocity multiplier applied once per update, tuned for 10ms steps
pub const DEATH_OPACITY: f32 = 0.05; // particles at or below this opacity are pruned

// Frame timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(10); // nominal driver period
pub const DT_MIN_SEC: f32 = 0.001;
pub const DT_MAX_SEC: f32 = 0.033; // caps position jumps after a stall

// Pool and draw caps (performance mode, normal)
pub const MAX_PARTICLES_PERF: usize = 200;
pub const MAX_PARTICLES: usize = 300;
pub const DRAW_CAP_PERF: usize = 150;
pub const DRAW_CAP: usize = 250;
pub const TRAIL_POOL_FRACTION: f32 = 0.8; // trails stop once the pool is this full

// Density caps
pub const BURST_DENSITY_CAP_PERF: usize = 4;
pub const BURST_DENSITY_CAP: usize = 24;
pub const TRAIL_DENSITY_CAP_PERF: usize = 2;
pub const TRAIL_DENSITY_CAP: usize = 6;

// Burst shaping
pub const UPWARD_BIAS: f32 = 0.2; // fraction of launch speed subtracted from vy
pub const MIN_PATTERN_COUNT: usize = 4; // ripple/coin floor
pub const SPIN_RANGE_DEG: f32 = 180.0;
pub const COIN_SPIN_RANGE_DEG: f32 = 120.0;

// Trail shaping
pub const TRAIL_INTERVAL_FLOOR_PERF_MS: u64 = 40;
pub const TRAIL_JITTER_PX: f32 = 3.0;
pub const TRAIL_OPACITY: f32 = 0.85;
pub const TRAIL_FLOWER_LIFE_SEC: f32 = 0.8;
pub const TRAIL_FLOWER_OPACITY: f32 = 0.9;
pub const TRAIL_FLOWER_VX: f32 = 20.0; // |vx| bound
pub const TRAIL_FLOWER_VY: [f32; 2] = [-30.0, -10.0];

// Glyphs
pub const HEART_GLYPH: char = '❤';
pub const CURRENCY_GLYPHS: [char; 4] = ['￥', '$', '€', '£'];

// Default palette used when a configuration carries no usable colors
pub const DEFAULT_COLORS: [&str; 3] = ["#FF5252", "#FFC107", "#40C4FF"];
