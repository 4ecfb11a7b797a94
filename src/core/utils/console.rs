//! Browser console logging
//!
//! On wasm32 these forward to `console.log` / `console.warn` through
//! `web_sys`. Native builds (unit tests, integration tests) compile them to
//! no-ops: wasm imports panic when called off-wasm.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

/// `format!`-style `console.log`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::log(&format!($($arg)*))
    };
}

/// `format!`-style `console.warn`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::warn(&format!($($arg)*))
    };
}
