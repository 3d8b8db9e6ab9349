//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds.
///
/// Compiles to a no-op on non-wasm targets so the logic core can be unit
/// tested natively without a JS host.
///
/// ```rust,ignore
/// debug_log!("cart now holds {} items", total);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        ::web_sys::console::log_1(&format!($($arg)*).into());
        #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Emit a console warning.  Used for degraded paths (storage unavailable,
/// malformed persisted data) that must never surface to the user.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::warn_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}
