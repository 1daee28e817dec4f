use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Installs a global fmt subscriber writing through the test harness, filtered by the `TEST_LOG` environment variable.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("TEST_LOG").unwrap_or_default();
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_test_writer()
    .try_init(); // Ignore error ok: another test already installed the subscriber.
}

/// Log output captured in memory, for asserting on emitted events.
#[derive(Default, Clone)]
#[allow(dead_code)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);
#[allow(dead_code)]
impl CapturedLog {
  pub fn contents(&self) -> String {
    let buffer = self.0.lock().unwrap();
    String::from_utf8_lossy(&buffer).into_owned()
  }
}
impl io::Write for CapturedLog {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
impl<'a> MakeWriter<'a> for CapturedLog {
  type Writer = Self;
  fn make_writer(&'a self) -> Self::Writer { self.clone() }
}
