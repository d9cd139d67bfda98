use crate::core::data::pixel_buffer::PixelBuffer;

/// Output boundary for rendered frames. The drawing layer behind it owns
/// the actual surface.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &PixelBuffer);
}
