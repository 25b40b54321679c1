use std::path::PathBuf;

use anyhow::Result;
use outlook_archiver::{download_all_images, make_gif, HttpFetch, Overlay};

/// Playback rate for the per-variant clips.
const FRAME_RATE: u32 = 10;

/// Every (year, variant) combination to rebuild. 2023 is served from the
/// seven-day archive; the earlier seasons from the five-day archive.
const YEARS: [i32; 4] = [2020, 2021, 2022, 2023];
const OVERLAYS: [Overlay; 2] = [Overlay::Clouds, Overlay::NoClouds];

fn main() -> Result<()> {
    let fetcher = HttpFetch::new();

    for year in YEARS {
        for overlay in OVERLAYS {
            if let Err(err) = run_combination(&fetcher, year, overlay) {
                eprintln!(
                    "Archive run for {} {} failed: {}",
                    year,
                    overlay.dir_name(),
                    err
                );
            }
        }
    }

    Ok(())
}

/// Archive and animate one (year, variant) combination. Frames land in
/// `{year}/{variant}/` and the clip next to the binary as
/// `{year}_{variant}.gif`.
fn run_combination(fetcher: &HttpFetch, year: i32, overlay: Overlay) -> Result<()> {
    let frames_dir = PathBuf::from(year.to_string()).join(overlay.dir_name());
    let images = download_all_images(fetcher, &frames_dir, year, overlay)?;

    let output = PathBuf::from(format!("{}_{}.gif", year, overlay.dir_name()));
    make_gif(&images, &output, FRAME_RATE)
}
