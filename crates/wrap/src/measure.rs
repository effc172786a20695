//! The measurement wrapper: wall-clock time and heap usage per call

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use adorn_core::{
    ArgBundle, Callable, Result, Value, BYTES_PER_MEGABYTE, REPORT_RULE_WIDTH,
};
use serde::Serialize;

use crate::alloc::TraceSession;

/// One measured call, rendered in the fixed report layout.
///
/// Memory figures are decimal megabytes (bytes / 10^6) and every numeric
/// field carries exactly six digits after the decimal point.
#[derive(Debug, Clone, Serialize)]
pub struct PerfReport {
    pub function: String,
    pub current_bytes: usize,
    pub peak_bytes: usize,
    pub elapsed: Duration,
}

impl fmt::Display for PerfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current_bytes as f64 / BYTES_PER_MEGABYTE;
        let peak = self.peak_bytes as f64 / BYTES_PER_MEGABYTE;
        writeln!(f, "Function: {}", self.function)?;
        writeln!(f, "Memory usage:\t\t {current:.6} MB ")?;
        writeln!(f, "Peak memory usage:\t {peak:.6} MB ")?;
        writeln!(f, "Time elapsed is seconds: {:.6}", self.elapsed.as_secs_f64())?;
        write!(f, "{}", "-".repeat(REPORT_RULE_WIDTH))
    }
}

/// Wrapper measuring each call and reporting on stdout.
///
/// Unlike the plain wrappers, this one keeps the target's display name: the
/// report must attribute its figures to the original callable. The target's
/// return value is discarded.
pub struct Measured {
    target: Arc<dyn Callable>,
    display_name: String,
}

impl Measured {
    /// Run one measured call and hand back the report instead of printing it
    pub fn measure_call(&self, args: &ArgBundle) -> Result<PerfReport> {
        let session = TraceSession::start();
        let started = Instant::now();
        let outcome = self.target.call(args);
        let sample = session.sample();
        let elapsed = started.elapsed();
        drop(session);
        outcome?;

        Ok(PerfReport {
            function: self.display_name.clone(),
            current_bytes: sample.current,
            peak_bytes: sample.peak,
            elapsed,
        })
    }
}

impl Callable for Measured {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn call(&self, args: &ArgBundle) -> Result<Value> {
        let report = self.measure_call(args)?;
        println!("{report}");
        Ok(Value::Null)
    }
}

/// Wrap `target` with per-call measurement, preserving its identity
#[must_use]
pub fn measure(target: Arc<dyn Callable>) -> Measured {
    // The one wrapper that copies the target's name onto itself: reports
    // must read "Function: <original>", never "Function: wrapper".
    let display_name = target.display_name().to_string();
    Measured {
        target,
        display_name,
    }
}
