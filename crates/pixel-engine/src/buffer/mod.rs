//! The pixel buffer shared by every engine component.

mod pixel_buffer;
mod rows;

pub(crate) use pixel_buffer::byte_len;
pub use pixel_buffer::{PixelBuffer, CHANNELS};
pub(crate) use rows::for_each_row_mut;
