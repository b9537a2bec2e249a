/// Particle budget, pacing and parallax tuning constants.
///
/// These express intended behavior (caps, intervals, layer factors) and keep
/// magic numbers out of the emitter and event wiring.
// Live-particle caps per pool
pub const MAX_PARTICLES: usize = 50;
pub const MAX_AMBIENT_PARTICLES: usize = 20;

// Lowered caps for constrained hardware (hardwareConcurrency <= 2)
pub const LOW_END_MAX_PARTICLES: usize = 20;
pub const LOW_END_MAX_AMBIENT_PARTICLES: usize = 10;
pub const LOW_END_CORES: u32 = 2;

// Cursor trail gating
pub const TRAIL_MIN_INTERVAL_MS: f64 = 100.0;
pub const TRAIL_SPAWN_THRESHOLD: f64 = 0.8; // draw must exceed this

// Random cosmic events
pub const COSMIC_INTERVAL_MS: i32 = 5000;
pub const COSMIC_FIRE_THRESHOLD: f64 = 0.95; // draw must exceed this

// Startup seeding
pub const INITIAL_TRAIL_COUNT: usize = 10;
pub const INITIAL_TRAIL_STAGGER_MS: f64 = 500.0;

// Pointer parallax
pub const POINTER_PARALLAX_SCALE: f32 = 0.01;
pub const NEBULA_POINTER_FACTOR: f32 = 0.005;
pub const DEFAULT_FLOAT_SPEED: f32 = 0.5;
pub const POINTER_EASE_TAU_SEC: f32 = 0.12;

// Scroll parallax layer factors
pub const STARS_SCROLL_FACTOR: f32 = 0.1;
pub const MOVING_STARS_SCROLL_FACTOR: f32 = 0.2;
pub const NEBULA_SCROLL_FACTOR: f32 = 0.05;
pub const NEBULA_SCROLL_SCALE_PER_PX: f32 = 0.0001;
pub const FLOAT_SCROLL_BASE: f32 = 0.1;
pub const FLOAT_SCROLL_STEP: f32 = 0.05;

// Element pulse classes
pub const ALIEN_PULSE_MS: i32 = 1000;
pub const AVATAR_PULSE_MS: i32 = 200;

// Color palettes
pub const EXPLOSION_PALETTE: &[&str] = &["#00ff88", "#06ffa5", "#ff006e", "#6b46c1", "#ffd700"];
pub const NAV_PALETTE: &[&str] = &["#00ff88", "#06ffa5", "#6b46c1"];
pub const BURST_PALETTE: &[&str] = &["#00ff88", "#06ffa5"];
pub const HOVER_GLOW_COLOR: &[&str] = &["#00ff88"];
pub const AVATAR_GLOW_COLOR: &[&str] = &["#06ffa5"];
pub const SPARK_COLOR: &[&str] = &["#ffd700"];
pub const WELCOME_PALETTE: &[&str] = &["#00ff88", "#06ffa5", "#6b46c1", "#ffd700"];
pub const MINI_BURST_COLOR: &[&str] = &["#06ffa5"];
pub const WAVE_COLOR: &str = "#00ff88";
pub const RING_COLOR: &str = "#00ff88";

// Glyph sets
pub const SOCIAL_GLYPHS: &[&str] = &["\u{1F4F1}", "\u{1F310}", "\u{1F4AB}", "\u{2728}"];
pub const AMBIENT_GLYPH: &str = "\u{1F33F}";
