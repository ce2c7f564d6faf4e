//! Bounds-checked big-endian byte reader.

use super::error::FormatError;

/// Cursor over an input buffer. Every read checks the remaining length first
/// and reports [`FormatError::UnexpectedEof`] instead of panicking.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), FormatError> {
        if n > self.remaining() {
            Err(FormatError::UnexpectedEof {
                offset: self.x,
                needed: n,
            })
        } else {
            Ok(())
        }
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn buf(&mut self, n: usize) -> Result<&'a [u8], FormatError> {
        self.check(n)?;
        let bytes = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(bytes)
    }

    /// Whether the unread input starts with `expected`. Does not advance.
    pub fn starts_with(&self, expected: &[u8]) -> bool {
        self.data[self.x..].starts_with(expected)
    }

    /// Consumes `expected` or fails with [`FormatError::TagMismatch`].
    pub fn expect(&mut self, expected: &[u8], context: &'static str) -> Result<(), FormatError> {
        let offset = self.x;
        if self.buf(expected.len())? == expected {
            Ok(())
        } else {
            Err(FormatError::TagMismatch { context, offset })
        }
    }

    pub fn u8(&mut self) -> Result<u8, FormatError> {
        Ok(self.buf(1)?[0])
    }

    pub fn u32(&mut self) -> Result<u32, FormatError> {
        let bytes = self.buf(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn f64(&mut self) -> Result<f64, FormatError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.buf(8)?);
        Ok(f64::from_be_bytes(raw))
    }

    /// Reads bytes up to the next NUL and consumes the terminator.
    pub fn cstr(&mut self) -> Result<&'a [u8], FormatError> {
        let rest = &self.data[self.x..];
        let len = rest
            .iter()
            .position(|b| *b == 0)
            .ok_or(FormatError::UnexpectedEof {
                offset: self.data.len(),
                needed: 1,
            })?;
        let bytes = &rest[..len];
        self.x += len + 1;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_cursor() {
        let data = [0x01, 0x00, 0x00, 0x01, 0x00, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u32(), Ok(0x100));
        assert_eq!(reader.f64(), Ok(1.0));
        assert_eq!(reader.position(), 13);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_eof() {
        let mut reader = Reader::new(&[0x00, 0x01]);
        assert_eq!(
            reader.u32(),
            Err(FormatError::UnexpectedEof {
                offset: 0,
                needed: 4
            })
        );
        // failed read does not move the cursor
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_expect() {
        let mut reader = Reader::new(b"CrvDx");
        assert!(reader.starts_with(b"Crv"));
        assert_eq!(reader.expect(b"CrvD", "magic"), Ok(()));
        assert_eq!(
            reader.expect(b"y", "next"),
            Err(FormatError::TagMismatch {
                context: "next",
                offset: 4
            })
        );
    }

    #[test]
    fn test_cstr() {
        let mut reader = Reader::new(b"name\0\0rest");
        assert_eq!(reader.cstr(), Ok(&b"name"[..]));
        assert_eq!(reader.cstr(), Ok(&b""[..]));
        assert!(reader.cstr().is_err());
    }
}
