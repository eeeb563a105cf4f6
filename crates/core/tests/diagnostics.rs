//! Degraded results must be reported, not returned silently.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use v3math_core::{ops, Vec3};

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MakeWriter<'_> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a WARN-level subscriber, returning its result and what it logged.
fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}

#[test]
fn test_normalize_zero_is_reported() {
    let (out, logs) = capture(|| ops::normalize(Vec3::ZERO));
    assert_eq!(out, Vec3::ZERO);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(
        logs.contains("normalize: undefined for zero-length vector"),
        "{logs}"
    );
}

#[test]
fn test_angle_non_finite_is_reported() {
    let (out, logs) = capture(|| ops::angle(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X));
    assert!(out.is_nan());
    assert!(logs.contains("angle: undefined for non-finite vector"), "{logs}");
}

#[test]
fn test_angle_quick_zero_is_reported() {
    let (out, logs) = capture(|| ops::angle_quick(Vec3::X, Vec3::ZERO));
    assert!(out.is_nan());
    assert!(
        logs.contains("angle_quick: undefined for zero-length vector"),
        "{logs}"
    );
}

#[test]
fn test_reflect_degenerate_normal_is_reported() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let (out, logs) = capture(|| ops::reflect(v, Vec3::ZERO));
    assert_eq!(out, v);
    assert!(
        logs.contains("reflect: undefined for zero-length vector"),
        "{logs}"
    );
}

#[test]
fn test_well_defined_results_log_nothing() {
    let (_, logs) = capture(|| {
        (
            ops::normalize(Vec3::new(3.0, 0.0, 4.0)),
            ops::angle(Vec3::X, Vec3::Y),
            ops::reflect(Vec3::X, Vec3::Y),
        )
    });
    assert!(logs.is_empty(), "{logs}");
}
