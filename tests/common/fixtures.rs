//! Test fixtures and constants.

use photolab::assets::AssetLoader;
use pixel_engine::PixelBuffer;
use std::path::PathBuf;

/// Reference colors
pub mod colors {
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    /// WCAG AA-compliant gray on white (ratio ~4.54)
    pub const AA_GRAY: [u8; 4] = [0x76, 0x76, 0x76, 255];
    pub const HALF_RED: [u8; 4] = [200, 30, 30, 128];
}

/// Config with one extra kernel and a low weight cap
pub const CUSTOM_CONFIG: &str = "\
presets:
  ridge:
    description: Ridge detection
    weights:
      - [-1, -1, -1]
      - [-1, 8, -1]
      - [-1, -1, -1]
  boxBlur:
    weights:
      - [1]
curve:
  input1: 64
  output1: 32
  input2: 192
  output2: 224
filter:
  max_weight: 8
";

/// Left half black, right half white
pub fn split_image(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, _| {
        if x < width / 2 {
            colors::BLACK
        } else {
            colors::WHITE
        }
    })
    .unwrap()
}

/// Horizontal ramp with a per-column alpha
pub fn ramp(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        let v = (x * 255 / width.saturating_sub(1).max(1)).min(255) as u8;
        [v, v / 2, 255 - v, (x + y) as u8]
    })
    .unwrap()
}

/// Write `content` to a config file in a fresh temp dir
pub fn config_file(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Loader pointed at a temp config file
pub fn loader_for(content: &str) -> (tempfile::TempDir, AssetLoader) {
    let (dir, path) = config_file(content);
    (dir, AssetLoader::new(Some(path)))
}
