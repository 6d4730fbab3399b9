// Internal constants.

/// Number of symbols in a plane's Huffman alphabet.
pub(crate) const NUM_SYMBOLS: usize = 256;

/// Minimum heap capacity: 256 leaves plus up to 255 internal nodes, 1-indexed.
pub(crate) const HEAP_CAPACITY: usize = 512;

/// Original format values, LE32 at extradata offset 4.
///
/// See: 4.8. ExtradataWriter
pub const UTVIDEO_RGB: u32 = u32::from_le_bytes(*b"RGB\0");
pub const UTVIDEO_RGBA: u32 = u32::from_le_bytes(*b"RGBA");
pub const UTVIDEO_420: u32 = u32::from_le_bytes(*b"I420");
pub const UTVIDEO_422: u32 = u32::from_le_bytes(*b"I422");

/// Compression method, low bits of the extradata flags field.
pub const COMP_HUFF: u32 = 0;

/// Implementation ID written as the last byte of the extradata version field.
pub(crate) const IMPLEMENTATION_ID: u8 = 0xF0;

/// FourCCs a muxer maps each pixel format to (see GLOSSARY / §6).
pub const FOURCC_RGB: [u8; 4] = *b"ULRG";
pub const FOURCC_RGBA: [u8; 4] = *b"ULRA";
pub const FOURCC_YUV420: [u8; 4] = *b"ULY0";
pub const FOURCC_YUV422: [u8; 4] = *b"ULY2";
