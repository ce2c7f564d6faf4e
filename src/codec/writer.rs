//! Growable big-endian byte writer.

/// Appends big-endian primitives to an owned buffer.
///
/// # Example
///
/// ```ignore
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u32(0x0203_0405);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04, 0x05]);
/// ```
#[derive(Debug, Default)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an IEEE-754 double (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes raw bytes.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes `bytes` followed by a NUL terminator.
    pub fn cstr(&mut self, bytes: &[u8]) {
        self.buf(bytes);
        self.u8(0);
    }
}
