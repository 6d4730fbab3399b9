//! Lossless Ut Video (`ULRG`/`ULRA`/`ULY0`/`ULY2`) encoder core.
//!
//! An [`Encoder`] owns the reusable scratch buffers for one stream and
//! exposes [`Encoder::encode_picture`] as the per-frame entry point,
//! mirroring how a decoder instance in this codec family is built once
//! from stream parameters and then driven frame by frame.

pub mod bitio;
pub mod constants;
pub mod error;
pub mod extradata;
pub mod frame;
pub mod histogram;
pub mod huffman;
pub mod pixfmt;
pub mod predictor;
pub mod plane;

use log::trace;

pub use error::{Error, Result};
pub use extradata::ExtradataWriter;
pub use frame::Picture;
pub use pixfmt::{PixelFormat, Prediction};

use frame::FrameScratch;

/// A stream-scoped encoder instance.
///
/// See: 3.1 Configuration surface
pub struct Encoder {
    format: PixelFormat,
    prediction: Prediction,
    width: usize,
    height: usize,
    slices: usize,
    scratch: FrameScratch,
}

impl Encoder {
    /// Validates `(format, width, height)` and the raw prediction method
    /// integer, then constructs an encoder with freshly allocated (but
    /// not yet sized) scratch state.
    ///
    /// No scratch has been allocated at the point validation fails, so
    /// there is nothing to release on error.
    ///
    /// See: * 3.1 Configuration surface
    ///      * 7. ERROR HANDLING DESIGN
    pub fn new(
        format: PixelFormat,
        width: usize,
        height: usize,
        prediction_method: u8,
        slices: usize,
    ) -> Result<Self> {
        format.validate_dimensions(width, height)?;
        let prediction = Prediction::from_method(prediction_method)?;
        let slices = slices.max(1);

        Ok(Self {
            format,
            prediction,
            width,
            height,
            slices,
            scratch: FrameScratch::new(),
        })
    }

    /// The pixel format this encoder was constructed for.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The 16-byte stream-level header. Produced fresh on each call;
    /// callers write it once at stream start.
    ///
    /// See: 4.8. ExtradataWriter
    pub fn extradata(&self) -> [u8; 16] {
        ExtradataWriter::write(self.format, self.slices, false)
    }

    /// Encodes one picture into a freshly allocated packet.
    ///
    /// See: * 4.7. FrameEncoder
    ///      * 6. EXTERNAL INTERFACES (Picture -> Packet contract)
    pub fn encode_picture(&mut self, picture: &Picture) -> Result<Vec<u8>> {
        trace!("Encoder::encode_picture: {}x{}", self.width, self.height);
        frame::encode_picture(
            &mut self.scratch,
            self.format,
            self.prediction,
            self.width,
            self.height,
            self.slices,
            picture,
        )
    }
}
