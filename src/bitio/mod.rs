//! Low-level byte and bit sinks used to assemble one packet.
//!
//! See: * 4.1. BitWriter
//!      * 4.2. ByteStream

pub mod bytestream;
pub mod writer;

pub use bytestream::ByteStream;
pub use writer::BitWriter;
