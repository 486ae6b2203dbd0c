//! Diagnostic records, forwarded to the `log` facade when the `log` feature is on.
//! Without the feature every invocation expands to nothing.

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "nanocoll", $($arg)+);
    };
}

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "nanocoll", $($arg)+);
    };
}
