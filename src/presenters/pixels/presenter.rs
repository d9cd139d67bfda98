use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_size::RasterSize;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Framebuffer adapter over the pixels crate. The buffer stays at the fixed
/// raster size; pixels scales it onto whatever surface the window provides.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, raster: RasterSize) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)
            .expect("Failed to create pixels surface");

        Self { pixels }
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl FramePresenterPort for PixelsPresenter {
    /// Copies the RGB frame into the RGBA pixels buffer, alpha opaque.
    fn present(&mut self, frame: &PixelBuffer) {
        let dest = self.pixels.frame_mut();
        let expected_rgba_len = frame.size().pixel_count() * 4;

        assert_eq!(
            dest.len(),
            expected_rgba_len,
            "pixels frame length {} does not match expected {} for {}x{}",
            dest.len(),
            expected_rgba_len,
            frame.size().width(),
            frame.size().height()
        );

        for (src_pixel, dst_pixel) in frame
            .buffer()
            .chunks_exact(3)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }
}
