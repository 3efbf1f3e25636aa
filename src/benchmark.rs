use std::time::Instant;

/// Runs `f` once and returns its result with the wall-clock time it took, in
/// milliseconds.
///
/// The result is passed through untouched, so wrapping a call never changes
/// what it returns.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let started = Instant::now();
    let result = f();
    (result, started.elapsed().as_secs_f64() * 1000.0)
}
