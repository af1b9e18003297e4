// Logging macros that never emit the symptom text itself
#[macro_export]
macro_rules! phi_info {
    ($text:expr, $($arg:tt)+) => {
        tracing::info!(text_fingerprint = %$crate::fingerprint($text), $($arg)+)
    };
}

#[macro_export]
macro_rules! phi_debug {
    ($text:expr, $($arg:tt)+) => {
        tracing::debug!(text_fingerprint = %$crate::fingerprint($text), $($arg)+)
    };
}
