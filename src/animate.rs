use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

/// Per-frame delay in milliseconds, one value for the whole clip: the
/// frame count divided by the playback rate, rounded down. Frames are
/// irregularly spaced in time but all play at the same rate.
pub fn frame_duration(frame_count: usize, frame_rate: u32) -> u32 {
    frame_count as u32 / frame_rate
}

/// Assemble archived frames, in the order given, into one looping GIF.
///
/// Every file is decoded as an image and written with the same computed
/// delay. An empty frame list is a precondition violation and fails the
/// run. Frames are not resized; mismatched dimensions are the caller's
/// problem.
pub fn make_gif(paths: &[PathBuf], output: &Path, frame_rate: u32) -> Result<()> {
    if paths.is_empty() {
        bail!("Cannot animate an empty frame list");
    }

    println!("Making GIF");
    let duration = frame_duration(paths.len(), frame_rate);
    println!("GIF will be {} seconds long", duration);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .context("Failed to set GIF looping")?;

    for path in paths {
        let decoded = image::open(path)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        let frame = Frame::from_parts(
            decoded.to_rgba8(),
            0,
            0,
            Delay::from_numer_denom_ms(duration, 1),
        );
        encoder
            .encode_frame(frame)
            .with_context(|| format!("Failed to encode frame {}", path.display()))?;
    }

    Ok(())
}
