// Error codes implementation
// Stable codes reported to clients in the `error_code` field of an error payload

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const PAYLOAD_TOO_LARGE: &str = "VALIDATION_1003";
}

pub mod transcription {
    pub const PROVIDER_FAILED: &str = "TRANSCRIPTION_2001";
    pub const SERVICE_UNAVAILABLE: &str = "TRANSCRIPTION_2002";
    pub const INVALID_AUDIO: &str = "TRANSCRIPTION_2003";
}

pub mod external {
    pub const NETWORK_FAILURE: &str = "EXTERNAL_3002";
}

pub mod configuration {
    pub const INVALID_CONFIG: &str = "CONFIG_4001";
    pub const TABLES_UNREADABLE: &str = "CONFIG_4002";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_5001";
    pub const SERVER_FAILURE: &str = "INTERNAL_5002";
}
