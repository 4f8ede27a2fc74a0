// Both directions stay well below this between steps: the encoder holds
// at most 12 + 8 bits, the decoder at most 7 + 13.
const CAPACITY: u32 = u32::BITS;

/// A little-endian bit queue bridging byte and word granularity.
///
/// New bits are appended above the ones already buffered, and bits are
/// taken back out from the LSB side.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    // Pending bits, starting at the LSB.
    buf: u32,

    // How many bits in `buf` are currently filled.
    count: u32,
}

impl Accumulator {
    pub const fn new() -> Self {
        Self { buf: 0, count: 0 }
    }

    /// Gets the number of buffered bits.
    #[inline]
    pub fn len(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends the low `nbits` bits of `value`.
    #[inline]
    pub fn push(&mut self, value: u32, nbits: u32) {
        debug_assert!(self.count + nbits <= CAPACITY);
        debug_assert!(value >> nbits == 0);

        self.buf |= value << self.count;
        self.count += nbits;
    }

    /// Reads the low `nbits` bits without removing them.
    ///
    /// Bits beyond [`Self::len`] read as zero.
    #[inline]
    pub fn peek(&self, nbits: u32) -> u32 {
        self.buf & ((1 << nbits) - 1)
    }

    /// Removes the low `nbits` bits.
    #[inline]
    pub fn consume(&mut self, nbits: u32) {
        debug_assert!(nbits <= self.count);

        self.buf >>= nbits;
        self.count -= nbits;
    }

    /// Removes and returns the low `nbits` bits.
    #[inline]
    pub fn take(&mut self, nbits: u32) -> u32 {
        let value = self.peek(nbits);
        self.consume(nbits);
        value
    }
}
