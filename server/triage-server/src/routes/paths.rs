//! Route path constants shared by the router and the API tests

/// Liveness banner
pub const ROOT: &str = "/";

pub mod health {
    pub const HEALTH: &str = "/health";
}

pub mod analysis {
    pub const ANALYZE_TEXT: &str = "/analyze-text/";
    pub const ANALYZE_TEXT_NO_SLASH: &str = "/analyze-text";
    pub const ANALYZE_AUDIO: &str = "/analyze-audio/";
    pub const ANALYZE_AUDIO_NO_SLASH: &str = "/analyze-audio";
}
