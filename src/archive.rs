//! The download pipeline: index page in, archived frames on disk out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::epoch::{EpochRule, Overlay};
use crate::fetch::Fetch;
use crate::index::{extract_links, fetch_index, filter_by_year};
use crate::locate;

/// Filename timestamp format for archived frames. Sorting these names
/// lexically sorts them chronologically.
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// What happened to one archive entry during a run.
#[derive(Debug)]
pub enum FrameOutcome {
    /// Already on disk from an earlier run; reused as-is.
    Skipped(PathBuf),
    /// Fetched and written this run.
    Downloaded(PathBuf),
    /// Download failed; the frame is left out of this run's results.
    Failed {
        issued: NaiveDateTime,
        reason: String,
    },
}

impl FrameOutcome {
    /// The archived path, if this entry made it to disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FrameOutcome::Skipped(path) | FrameOutcome::Downloaded(path) => Some(path),
            FrameOutcome::Failed { .. } => None,
        }
    }
}

/// Fetch the archive index and bring every outlook image for one year
/// onto disk, oldest first. Returns one outcome per entry, in issuance
/// order. Index fetch, extraction, and id-resolution failures abort the
/// run; a single failed download is logged and dropped.
pub fn archive_frames(
    fetcher: &dyn Fetch,
    dest_dir: &Path,
    year: i32,
    overlay: Overlay,
) -> Result<Vec<FrameOutcome>> {
    let epoch = EpochRule::for_year(year);
    let page = fetch_index(fetcher, epoch)?;
    let links = filter_by_year(&extract_links(&page)?, year);

    // The index lists newest first; archive and animate oldest first.
    let mut entries: Vec<(NaiveDateTime, String)> = links.into_iter().collect();
    entries.reverse();

    let mut downloads = Vec::with_capacity(entries.len());
    for (issued, page_url) in entries {
        let id = locate::image_id(&page_url)?;
        downloads.push((issued, locate::image_url(id, year, overlay)));
    }

    fs::create_dir_all(dest_dir)?;

    let total = downloads.len();
    let mut outcomes = Vec::with_capacity(total);
    for (i, (issued, image_url)) in downloads.into_iter().enumerate() {
        let date_str = issued.format(FILE_DATE_FORMAT).to_string();
        let file_name = dest_dir.join(format!("{}.png", date_str));

        if file_name.is_file() {
            println!("Skipping image for {}", date_str);
            outcomes.push(FrameOutcome::Skipped(file_name));
            continue;
        }

        println!("Downloading image for {} {} of {}", date_str, i + 1, total);
        match fetch_to_file(fetcher, &image_url, &file_name) {
            Ok(()) => outcomes.push(FrameOutcome::Downloaded(file_name)),
            Err(err) => {
                println!("Unable to download image for {}: {}", date_str, err);
                outcomes.push(FrameOutcome::Failed {
                    issued,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(outcomes)
}

/// Archive one year and return the paths that made it to disk, oldest
/// first. This is what the animator consumes.
pub fn download_all_images(
    fetcher: &dyn Fetch,
    dest_dir: &Path,
    year: i32,
    overlay: Overlay,
) -> Result<Vec<PathBuf>> {
    let outcomes = archive_frames(fetcher, dest_dir, year, overlay)?;
    Ok(outcomes
        .iter()
        .filter_map(|outcome| outcome.path().map(Path::to_path_buf))
        .collect())
}

fn fetch_to_file(fetcher: &dyn Fetch, url: &str, dest: &Path) -> Result<()> {
    let bytes = fetcher.fetch_bytes(url)?;
    fs::write(dest, bytes)?;
    Ok(())
}
