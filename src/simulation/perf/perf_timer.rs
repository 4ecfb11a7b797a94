/// Wall-clock stopwatch for perf metrics.
///
/// `Instant` is unavailable on wasm32-unknown-unknown, so the browser clock
/// is read through `js_sys` there.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: js_sys::Date::now() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn start() -> Self {
        PerfTimer { start: std::time::Instant::now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (js_sys::Date::now() - self.start_ms).max(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
