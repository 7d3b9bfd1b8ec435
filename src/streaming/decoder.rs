use serde_json::Value;

use crate::core::TradierError;

/// Incremental decoder for newline-delimited JSON.
///
/// Feed raw chunks with [`push`](Self::push) as they arrive, then drain complete events
/// with [`next_event`](Self::next_event). Chunk boundaries may fall anywhere, including
/// inside a multi-byte character. Blank lines are skipped.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buf: Vec<u8>,
}

impl LineDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of the body.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Decode the next complete line, if one is buffered.
    pub fn next_event(&mut self) -> Option<Result<Value, TradierError>> {
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            return Some(serde_json::from_slice(line).map_err(TradierError::from));
        }
        None
    }

    /// Decode whatever is left once the body has ended without a trailing newline.
    pub fn finish(&mut self) -> Option<Result<Value, TradierError>> {
        let rest = std::mem::take(&mut self.buf);
        let rest = rest.trim_ascii();
        if rest.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(rest).map_err(TradierError::from))
        }
    }
}
