// Archive pipeline modules
pub mod animate;
pub mod archive;
pub mod epoch;
pub mod fetch;
pub mod index;
pub mod locate;

#[cfg(test)]
pub mod tests;

// Re-export the pipeline surface the drivers use
pub use crate::animate::{frame_duration, make_gif};
pub use crate::archive::{archive_frames, download_all_images, FrameOutcome};
pub use crate::epoch::{EpochRule, Overlay};
pub use crate::fetch::{Fetch, HttpFetch};
pub use crate::index::{extract_links, fetch_index, filter_by_year, LinkIndex};
pub use crate::locate::{image_id, image_url};
