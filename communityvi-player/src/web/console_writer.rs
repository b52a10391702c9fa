use std::io::Write;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Routes formatted log lines to the browser console, using the console method matching the event's level.
pub struct MakeConsoleWriter;

impl<'writer> MakeWriter<'writer> for MakeConsoleWriter {
	type Writer = ConsoleWriter;

	fn make_writer(&'writer self) -> Self::Writer {
		ConsoleWriter::new(Level::INFO)
	}

	fn make_writer_for(&'writer self, metadata: &Metadata<'_>) -> Self::Writer {
		ConsoleWriter::new(*metadata.level())
	}
}

/// Buffers one formatted event and hands it to the console when dropped.
pub struct ConsoleWriter {
	level: Level,
	buffer: Vec<u8>,
}

impl ConsoleWriter {
	fn new(level: Level) -> Self {
		Self {
			level,
			buffer: Vec::new(),
		}
	}
}

impl Write for ConsoleWriter {
	fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
		self.buffer.extend_from_slice(bytes);
		Ok(bytes.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		if self.buffer.is_empty() {
			return Ok(());
		}

		let line = String::from_utf8_lossy(&self.buffer);
		let message = JsValue::from_str(line.trim_end());
		if self.level == Level::ERROR {
			web_sys::console::error_1(&message);
		} else if self.level == Level::WARN {
			web_sys::console::warn_1(&message);
		} else if self.level == Level::INFO {
			web_sys::console::info_1(&message);
		} else {
			web_sys::console::debug_1(&message);
		}
		self.buffer.clear();
		Ok(())
	}
}

impl Drop for ConsoleWriter {
	fn drop(&mut self) {
		let _ = self.flush();
	}
}
