use std::path::PathBuf;

use anyhow::Result;
use outlook_archiver::{download_all_images, make_gif, HttpFetch, Overlay};

/// Playback rate for the full-year clip.
const FRAME_RATE: u32 = 15;

const TARGET_YEAR: i32 = 2020;

/// Archive one season of cloud-overlay outlooks into a flat `{year}/`
/// directory and animate the result, plus a September-only cut while the
/// frames are at hand.
fn main() -> Result<()> {
    let fetcher = HttpFetch::new();

    let frames_dir = PathBuf::from(TARGET_YEAR.to_string());
    let images = download_all_images(&fetcher, &frames_dir, TARGET_YEAR, Overlay::Clouds)?;

    let output = PathBuf::from(format!("{}.gif", TARGET_YEAR));
    make_gif(&images, &output, FRAME_RATE)?;

    let september: Vec<PathBuf> = images
        .iter()
        .filter(|path| path.to_string_lossy().contains("-09-"))
        .cloned()
        .collect();
    if !september.is_empty() {
        let output = PathBuf::from(format!("{}_september.gif", TARGET_YEAR));
        make_gif(&september, &output, FRAME_RATE)?;
    }

    Ok(())
}
