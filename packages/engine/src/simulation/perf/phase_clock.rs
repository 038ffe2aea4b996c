/// Lap clock for the step phases. `Date.now()` on wasm, `Instant` natively.
#[derive(Clone, Copy)]
pub(crate) struct PhaseClock {
    origin: Stamp,
    last: Stamp,
}

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn millis_between(from: Stamp, to: Stamp) -> f64 {
    to - from
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_between(from: Stamp, to: Stamp) -> f64 {
    to.duration_since(from).as_secs_f64() * 1000.0
}

impl PhaseClock {
    pub(crate) fn start() -> Self {
        let t = now();
        Self { origin: t, last: t }
    }

    /// Milliseconds since the previous lap (or since start)
    pub(crate) fn lap(&mut self) -> f64 {
        let t = now();
        let ms = millis_between(self.last, t);
        self.last = t;
        ms
    }

    /// Milliseconds since start
    pub(crate) fn total(&self) -> f64 {
        millis_between(self.origin, now())
    }
}
