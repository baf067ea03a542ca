use glam::Vec3;

// Shared scene and scroll tuning constants used by the web frontend.

// Scroll input
pub const WHEEL_SENSITIVITY: f32 = 0.002; // progress gained per wheel pixel
pub const MAX_PROGRESS: f32 = 1.5; // upper clamp; phase B lives in (1, MAX]
pub const PHASE_THRESHOLD: f32 = 1.0; // progress above this selects phase B
pub const WHEEL_LINE_PX: f32 = 16.0; // DOM_DELTA_LINE -> pixels

// Model pose at load time
pub const MODEL_START_POSITION: Vec3 = Vec3::new(2.0, -0.6, 0.0);
pub const MODEL_START_SCALE: f32 = 1.8;

// Phase A: slide across, quarter turn about Y, slight shrink
pub const APPROACH_SLIDE_X: f32 = 5.5;
pub const APPROACH_RISE_Y: f32 = 0.1;
pub const APPROACH_SHRINK: f32 = 0.25;

// Phase B: fixed presentation pose, pitch about X proportional to progress
pub const PRESENTATION_POSITION: Vec3 = Vec3::new(-1.0, -0.85, 0.0);
pub const PRESENTATION_SCALE: f32 = 1.2;
pub const PRESENTATION_PITCH_PER_PROGRESS: f32 = std::f32::consts::PI * 0.22577;

// Text overlays
pub const OVERLAY_PRIMARY_WINDOW: (f32, f32) = (0.2, 1.0); // exclusive bounds
pub const OVERLAY_PRIMARY_HIDDEN_X: f32 = 300.0; // css px
pub const OVERLAY_SECONDARY_HIDDEN_X: f32 = -300.0; // css px

// Transition durations (seconds)
pub const TRANSITION_SEC: f32 = 0.5;
pub const PRESENTATION_ROTATION_SEC: f32 = 0.8;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 5.0);

// Antialiasing; WebGPU accepts 1 or 4
pub const MSAA_SAMPLE_COUNT: u32 = 4;

// Lighting and background (sRGB hex)
pub const CLEAR_COLOR_HEX: u32 = 0xeeeeee;
pub const KEY_LIGHT_HEX: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const AMBIENT_LIGHT_HEX: u32 = 0x404040;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 1.5;

// Fallback albedo for glTF primitives without a material
pub const DEFAULT_ALBEDO: [f32; 3] = [0.8, 0.8, 0.8];
