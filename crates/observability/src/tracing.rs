//! Tracing/logging initialization.
//!
//! Native builds emit JSON lines to stdout; browser builds have no stdout and
//! no wall clock, so events are formatted without timestamps and forwarded to
//! the developer console.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

#[cfg(not(target_arch = "wasm32"))]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize tracing/logging for the page.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(console::ConsoleMakeWriter)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    /// Hands one formatted event at a time to `console.log`.
    pub struct ConsoleMakeWriter;

    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buf: Vec::new() }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buf.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
            self.buf.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}
