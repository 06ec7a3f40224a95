//! Stable application-wide constants.
//!
//! Default fallbacks for env-var-based configuration plus the fixed anchor
//! and offsets used by the fallback data generator.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "8000";

// --- Completion provider defaults ---

/// Default base URL of the chat-completion provider. Overridden by `COMPLETION_BASE_URL`.
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model identifier. Overridden by `COMPLETION_MODEL`.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
/// Default sampling temperature. Overridden by `COMPLETION_TEMPERATURE`.
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.7;
/// Default output token budget. Overridden by `COMPLETION_MAX_TOKENS`.
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 1000;
/// Default upper bound on a single completion call. Overridden by `COMPLETION_TIMEOUT_SECS`.
pub const DEFAULT_COMPLETION_TIMEOUT_SECONDS: u64 = 30;

/// Fixed system instruction sent ahead of every generated prompt.
pub const COMPLETION_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates JSON data for a maps and analytics application.";

// --- Anchor used when the caller gives no location ---

/// Default anchor latitude (Chennai city centre).
pub const DEFAULT_ANCHOR_LAT: f64 = 13.0827;
/// Default anchor longitude (Chennai city centre).
pub const DEFAULT_ANCHOR_LNG: f64 = 80.2707;

// --- Fallback point layout ---
// (dlat, dlng) offsets in degrees from the anchor. A few hundred meters each
// at mid latitudes. Index 0 is the anchor itself.

/// Offsets of the five fallback points around the anchor.
pub const FALLBACK_POINT_OFFSETS: [(f64, f64); 5] = [
    (0.0, 0.0),
    (0.005, 0.005),
    (-0.005, -0.005),
    (0.008, -0.003),
    (-0.003, 0.007),
];
