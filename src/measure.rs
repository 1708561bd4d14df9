//! Resource measurement around a search call
//!
//! Memory figures come from jemalloc's statistics; they are only meaningful when
//! the binary installs `tikv_jemallocator::Jemalloc` as its global allocator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// How often the sampler reads resident memory while a call runs
const SAMPLE_INTERVAL: Duration = Duration::from_micros(200);

/// Output of a measured call
#[derive(Debug)]
pub struct Measured<T> {
    pub output: T,
    pub elapsed: Duration,
    /// Highest resident memory seen before, during or after the call
    pub peak_megabytes: f64,
}

/// Resident memory in megabytes, as last reported by jemalloc
///
/// # Errors
/// Returns the jemalloc control error if the statistics cannot be read.
pub fn resident_megabytes() -> Result<f64, tikv_jemalloc_ctl::Error> {
    // Stats are cached until the epoch advances
    epoch::advance()?;
    let resident = stats::resident::read()?;
    Ok(resident as f64 / BYTES_PER_MB)
}

/// Run `f`, returning its output and wall-clock duration
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// Run `f` on the current thread while a sampler thread tracks peak resident memory
///
/// jemalloc returns large extents to the OS as soon as they are freed, so a
/// single reading after `f` returns misses whatever `f` built and dropped.
///
/// # Errors
/// Returns the jemalloc control error if the statistics cannot be read.
pub fn measure_peak<T>(f: impl FnOnce() -> T) -> Result<Measured<T>, tikv_jemalloc_ctl::Error> {
    let baseline = resident_megabytes()?;
    let stop = AtomicBool::new(false);

    let (output, elapsed, sampled) = thread::scope(|scope| {
        let sampler = scope.spawn(|| {
            let mut peak = 0.0_f64;
            while !stop.load(Ordering::Relaxed) {
                if let Ok(mb) = resident_megabytes() {
                    peak = peak.max(mb);
                }
                thread::sleep(SAMPLE_INTERVAL);
            }
            peak
        });

        let (output, elapsed) = timed(f);
        stop.store(true, Ordering::Relaxed);
        // A panicked sampler only loses its samples
        let sampled = sampler.join().unwrap_or(0.0);
        (output, elapsed, sampled)
    });

    let after = resident_megabytes()?;
    log::debug!("Resident memory: baseline {baseline:.2} MB, sampled {sampled:.2} MB, after {after:.2} MB");

    Ok(Measured {
        output,
        elapsed,
        peak_megabytes: baseline.max(sampled).max(after),
    })
}
