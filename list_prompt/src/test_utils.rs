// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

/// An in-memory [`Write`] sink, so render output can be inspected in tests.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self {
        TestStringWriter {
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let result = std::str::from_utf8(buf);
        match result {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Plain text of painted output: colors, cursor moves, and every other escape sequence
/// are removed.
#[must_use]
pub fn strip_ansi_escape_sequences(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}
