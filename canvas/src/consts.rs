//! Shared numeric constants for the canvas crate.
//!
//! These are the defaults behind [`crate::config::ViewConfig`]. Hosts that
//! receive tuned values from their own configuration override them there;
//! nothing else in the crate reads the world/camera/zoom constants directly.

// ── World ───────────────────────────────────────────────────────

/// Width of the playable world in world units.
pub const WORLD_WIDTH: f64 = 4000.0;

/// Height of the playable world in world units.
pub const WORLD_HEIGHT: f64 = 4000.0;

// ── Camera ──────────────────────────────────────────────────────

/// Fraction of the remaining distance to the target closed per reference frame.
pub const CAMERA_SMOOTH_FACTOR: f64 = 0.1;

/// Smallest allowed zoom (most zoomed out).
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom (most zoomed in).
pub const ZOOM_MAX: f64 = 2.0;

/// Percent of zoom lost per unit of snake length.
pub const ZOOM_SCALE_FACTOR: f64 = 0.1;

/// Floor applied to the length-derived zoom factor before clamping.
pub const MIN_FOLLOW_ZOOM_FACTOR: f64 = 0.3;

/// Frame duration the smoothing factors are tuned against (60 Hz).
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;

// ── Interpolation ───────────────────────────────────────────────

/// Fraction of the gap between rendered and authoritative player state closed per reference frame.
pub const INTERPOLATION_FACTOR: f64 = 0.2;

/// Head displacement (world units) above which a player is snapped instead of interpolated.
pub const TELEPORT_DISTANCE: f64 = 500.0;

// ── Food animation ──────────────────────────────────────────────

/// Pulse phase advance in radians per second.
pub const PULSE_SPEED: f64 = 3.0;

/// Glow alpha at zero phase.
pub const GLOW_BASE: f64 = 0.3;

/// Glow alpha swing around [`GLOW_BASE`].
pub const GLOW_AMPLITUDE: f64 = 0.2;

/// Relative size swing of a pulsing food pellet.
pub const PULSE_SIZE_AMPLITUDE: f64 = 0.1;

/// Extra culling margin for food, as a multiple of its size.
pub const FOOD_VISIBILITY_MARGIN: f64 = 2.0;

// ── Players ─────────────────────────────────────────────────────

/// Segment radius of a zero-score snake.
pub const PLAYER_BASE_RADIUS: f64 = 10.0;

/// Segment radius gained per point of score.
pub const PLAYER_RADIUS_PER_SCORE: f64 = 0.01;

/// Upper bound on segment radius.
pub const PLAYER_MAX_RADIUS: f64 = 30.0;

/// Alpha used when drawing a dead snake before the server removes it.
pub const DEAD_PLAYER_ALPHA: f64 = 0.35;

// ── Input / control ─────────────────────────────────────────────

/// `KeyboardEvent.code` of the boost key.
pub const BOOST_KEY: &str = "Space";

/// Minimum spacing between outbound control messages.
pub const CONTROL_INTERVAL_MS: f64 = 50.0;

/// Maximum silence before an unchanged control signal is re-sent.
pub const CONTROL_KEEPALIVE_MS: f64 = 1000.0;

/// Steering change (radians) below which a control update is not worth sending.
pub const CONTROL_ANGLE_DEADBAND: f64 = 0.01;

// ── Colors ──────────────────────────────────────────────────────

/// Fill used when the server sends a color the client cannot parse.
pub const FALLBACK_COLOR: &str = "#d94b4b";
