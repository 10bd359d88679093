// DOM hooks shared by the sketch pages.

pub const CANVAS_ID: &str = "app-canvas";
pub const SKETCH_ATTR: &str = "data-sketch"; // on the canvas, e.g. data-sketch="rings"
pub const SOUND_BUTTON_ID: &str = "sound-toggle";
pub const INFO_POPUP_ID: &str = "info-popup";
pub const POPUP_OVERLAY_ID: &str = "popup-overlay";
pub const POPUP_SHOWN_CLASS: &str = "show";

// Frame deltas above this are treated as a stalled tab (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
