//! Fetching the archive index page and pulling the dated links out of it.
//!
//! The index embeds the entire archive as one long line of
//! `<br>`-separated anchors. The page is machine-generated and stable, so
//! rather than bringing in an HTML parser we find that line by marker
//! substring and slice each anchor fragment apart with a small scanner.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use indexmap::IndexMap;

use crate::epoch::{EpochRule, SITE_ROOT};
use crate::fetch::Fetch;

/// Archived outlook links keyed by issuance time, in the order the index
/// page lists them (newest first). A repeated issuance time keeps its
/// original position and takes the later URL.
pub type LinkIndex = IndexMap<NaiveDateTime, String>;

/// Display-date format used by the index page.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fragment separator within the marker line.
const LINK_SEPARATOR: &str = "<br>";

/// Fragments carrying this text point at the live outlook rather than an
/// archived one and are never downloaded.
const LATEST_MARKER: &str = "latest available";

const HREF_ATTR: &str = "href=";

/// Retrieve the raw archive index page for one era. A transport failure
/// here is fatal to the run.
pub fn fetch_index(fetcher: &dyn Fetch, epoch: EpochRule) -> Result<String> {
    fetcher.fetch_text(epoch.index_url())
}

/// Pull every dated archive link out of the index page.
///
/// Both era markers are tried on each line, five-day first, and the first
/// line containing either wins. Fragments that mention the live outlook
/// or carry no usable href are skipped; a display date that does not
/// parse fails the whole extraction.
pub fn extract_links(page: &str) -> Result<LinkIndex> {
    let markers = EpochRule::markers_in_scan_order();
    let info_line = page
        .lines()
        .find(|line| markers.iter().any(|marker| line.contains(marker)))
        .context("Could not find line with all the data")?;

    let mut links = LinkIndex::new();

    for fragment in info_line.split(LINK_SEPARATOR) {
        if fragment.contains(LATEST_MARKER) {
            continue;
        }

        let (href, date_text) = match split_link_fragment(fragment.trim()) {
            Some(parts) => parts,
            None => continue,
        };
        if href.is_empty() {
            continue;
        }

        let issued = NaiveDateTime::parse_from_str(&date_text, DATE_FORMAT)
            .with_context(|| format!("Bad date in archive index: {:?}", date_text))?;
        links.insert(issued, format!("{}{}", SITE_ROOT, href));
    }

    Ok(links)
}

/// Narrow the link index to outlooks issued in one calendar year. Order
/// is preserved.
pub fn filter_by_year(links: &LinkIndex, year: i32) -> LinkIndex {
    links
        .iter()
        .filter(|(issued, _)| issued.year() == year)
        .map(|(issued, url)| (*issued, url.clone()))
        .collect()
}

/// Scanner states for one anchor fragment.
enum FragmentState {
    SeekingHref,
    InHref,
    SeekingDate,
    InDate,
}

/// Split one `<a href="...">date</a>` fragment into its href and display
/// date. Returns None when the fragment has no complete quoted href,
/// which is the case for the leftover text around the final separator.
fn split_link_fragment(fragment: &str) -> Option<(String, String)> {
    let rest = match fragment.find(HREF_ATTR) {
        Some(at) => &fragment[at + HREF_ATTR.len()..],
        None => return None,
    };

    let mut href = String::new();
    let mut date = String::new();
    let mut state = FragmentState::SeekingHref;

    for ch in rest.chars() {
        state = match state {
            // the first character is the quote opening the attribute value
            FragmentState::SeekingHref => FragmentState::InHref,
            FragmentState::InHref => {
                if ch == '"' {
                    FragmentState::SeekingDate
                } else {
                    href.push(ch);
                    FragmentState::InHref
                }
            }
            // one character of tag close sits between the href and the date
            FragmentState::SeekingDate => FragmentState::InDate,
            FragmentState::InDate => {
                if ch == '<' {
                    break;
                }
                date.push(ch);
                FragmentState::InDate
            }
        };
    }

    match state {
        FragmentState::InDate => Some((href, date)),
        _ => None,
    }
}
