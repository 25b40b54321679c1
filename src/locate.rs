use anyhow::{Context, Result};

use crate::epoch::{EpochRule, Overlay};

/// Query parameter naming the archived issuance on an outlook page URL.
const ISSUANCE_PARAM: &str = "current_issuance=";

/// Extract the numeric issuance id from an archived outlook page URL.
/// Every archived image URL is derived from this id.
pub fn image_id(page_url: &str) -> Result<u64> {
    let at = page_url
        .find(ISSUANCE_PARAM)
        .with_context(|| format!("No issuance id in link: {}", page_url))?;
    let digits = &page_url[at + ISSUANCE_PARAM.len()..];
    digits
        .parse()
        .with_context(|| format!("Bad issuance id in link: {}", page_url))
}

/// Download URL for the raster image behind an archived outlook page.
/// Pure string construction; see `EpochRule::image_url` for the table.
pub fn image_url(image_id: u64, year: i32, overlay: Overlay) -> String {
    EpochRule::for_year(year).image_url(image_id, overlay)
}
