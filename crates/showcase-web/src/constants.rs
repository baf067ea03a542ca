// DOM ids and asset locations used by the web frontend.

pub const CONTAINER_ID: &str = "showcase";
pub const OVERLAY_IDS: [&str; 2] = ["info-text", "info-text-second"];

// Binary glTF fetched once on mount
pub const MODEL_URL: &str = "/model/porsche.glb";

// Canvas fills the viewport behind the text overlays
pub const CANVAS_STYLE: &str = "position:fixed;top:0;left:0;display:block;z-index:0";

// Skip overlay style writes below this change
pub const OVERLAY_EPSILON: f32 = 1e-3;
