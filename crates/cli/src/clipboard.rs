// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Terminal clipboard via the OSC 52 escape sequence.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use raffle_shop_api::{ApiError, ApiResult, Clipboard};
use std::io::Write;

/// Writes clipboard requests to a terminal stream.
///
/// The terminal decides whether to honour the request; nothing is read back.
pub struct Osc52Clipboard<W> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> ApiResult<()> {
        let payload: String = STANDARD.encode(text);
        write!(self.writer, "\x1b]52;c;{payload}\x07")
            .and_then(|()| self.writer.flush())
            .map_err(|err| ApiError::Clipboard(err.to_string()))
    }
}
