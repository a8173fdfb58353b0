// Shared placement/scenery tuning constants used by every rendering profile.

// Camera and distance model
pub const CAMERA_Z: f32 = 15.0; // world-space z the viewer stands at
pub const TERRAIN_DISTANCE_FALLOFF: f32 = 0.03; // how fast hills flatten with distance

// Height field layers: (frequency, amplitude)
pub const HILL_LAYER: (f32, f32) = (0.03, 2.0);
pub const ROLLING_LAYER: (f32, f32) = (0.008, 6.0);
pub const MICRO_LAYER: (f32, f32) = (0.08, 0.3);

// Screen -> world mapping for the 3D scene
pub const WORLD_SPAN_X: f32 = 35.0; // ndc x of ±1 maps to ±35 world units
pub const WORLD_SPAN_Z: f32 = 40.0;
pub const WORLD_Z_SHIFT: f32 = -10.0; // elevated camera looks slightly ahead
pub const STONE_DISTANCE_FALLOFF: f32 = 0.025;
pub const STONE_MIN_SCALE: f32 = 0.4;
pub const STONE_TINT_PER_UNIT: f32 = 0.006;

// Gravestone placeholder text for an uninscribed record
pub const PLACEHOLDER_TEXT: &str = "Click to\ninscribe";

// Year placeholder used when the structured form leaves a year empty
pub const UNKNOWN_YEAR: &str = "????";

// Touch gestures
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
pub const DOUBLE_TAP_SLOP_PX: f32 = 30.0; // "roughly the same location"
pub const DOUBLE_TAP_SIZE: [f32; 2] = [120.0, 150.0]; // fixed width/height of a tapped stone
pub const LONG_PRESS_MS: f64 = 600.0;
pub const TAP_SLOP_PX: f32 = 10.0; // a press on a stone that travels further is a swipe

// Haptic feedback durations
pub const VIBRATE_TAP_MS: u32 = 50;
pub const VIBRATE_MARK_MS: u32 = 100;
pub const VIBRATE_DELETE_MS: u32 = 200;

// Flower burst after an inscription
pub const BURST_FLOWERS: usize = 8;
pub const BURST_STAGGER_MS: u32 = 50;
