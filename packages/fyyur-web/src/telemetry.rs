//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `filter` is an `EnvFilter` directive such as `info` or `fyyur_web=debug`.
/// In the browser, output goes to the console without timestamps; wasm32 has
/// no system clock to read.
pub fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)?;

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let fmt_layer = tracing_subscriber::fmt::layer();

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(console::ConsoleMakeWriter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    /// Writer handed out per event; flushes one line to `console.log` on drop
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buf: Vec::new() }
        }
    }
}
