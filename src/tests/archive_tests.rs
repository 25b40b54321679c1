use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tempdir::TempDir;

use super::fixtures;
use crate::archive::{archive_frames, download_all_images, FrameOutcome};
use crate::epoch::Overlay;
use crate::fetch::Fetch;

/// Canned network: one index page plus image bodies, with a request log
/// so tests can check what was actually fetched.
struct CannedFetch {
    index_page: String,
    failing: Vec<&'static str>,
    requests: RefCell<Vec<String>>,
}

impl CannedFetch {
    fn new(index_page: String) -> CannedFetch {
        CannedFetch {
            index_page,
            failing: Vec::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn image_request_count(&self) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|url| url.ends_with(".png"))
            .count()
    }
}

impl Fetch for CannedFetch {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.index_page.clone())
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        if self.failing.iter().any(|part| url.contains(part)) {
            return Err(anyhow!("simulated connection failure"));
        }
        Ok(b"png bytes".to_vec())
    }
}

/// Build an index page whose marker line lists `entries` newest first.
fn index_page_with(entries: &[(&str, u32)]) -> String {
    let mut line = String::from(
        "<td><a href=\"archive/xgtwo_5day/gtwo_archive.php?basin=atl\">latest available outlook</a>",
    );
    for (date, id) in entries {
        line.push_str(&format!(
            "<br><a href=\"archive/xgtwo_5day/gtwo_archive.php?basin=atl&current_issuance={}\">{}</a>",
            id, date
        ));
    }
    line.push_str("<br></td>");
    format!("<html>\n<body>\n{}\n</body>\n</html>\n", line)
}

#[test]
fn archives_one_year_oldest_first() {
    let tmp = TempDir::new("outlook-archiver-test").unwrap();
    let fetcher = CannedFetch::new(fixtures::load_html_fixture("archive_listing"));
    let dest = tmp.path().join("2020");

    let paths = download_all_images(&fetcher, &dest, 2020, Overlay::Clouds).unwrap();

    assert_eq!(
        paths,
        vec![
            dest.join("2020-08-01_00-00.png"),
            dest.join("2020-09-15_06-00.png"),
        ]
    );
    for path in &paths {
        assert!(path.is_file());
    }
}

#[test]
fn rerun_reuses_archived_files_without_refetching() {
    let tmp = TempDir::new("outlook-archiver-test").unwrap();
    let fetcher = CannedFetch::new(fixtures::load_html_fixture("archive_listing"));
    let dest = tmp.path().join("2020");

    let first = download_all_images(&fetcher, &dest, 2020, Overlay::Clouds).unwrap();
    assert_eq!(fetcher.image_request_count(), 2);

    // both frames are on disk now, so only the index is fetched again
    let second = download_all_images(&fetcher, &dest, 2020, Overlay::Clouds).unwrap();
    assert_eq!(fetcher.image_request_count(), 2);
    assert_eq!(first, second);
}

#[test]
fn failed_download_is_dropped_and_the_run_continues() {
    let tmp = TempDir::new("outlook-archiver-test").unwrap();
    let page = index_page_with(&[
        ("2020-06-05 12:00", 5),
        ("2020-06-04 12:00", 4),
        ("2020-06-03 12:00", 3),
        ("2020-06-02 12:00", 2),
        ("2020-06-01 12:00", 1),
    ]);
    let mut fetcher = CannedFetch::new(page);
    fetcher.failing.push("/atl/3/");
    let dest = tmp.path().join("2020");

    let outcomes = archive_frames(&fetcher, &dest, 2020, Overlay::Clouds).unwrap();
    assert_eq!(outcomes.len(), 5);
    assert!(matches!(outcomes[2], FrameOutcome::Failed { .. }));

    let archived: Vec<PathBuf> = outcomes
        .iter()
        .filter_map(FrameOutcome::path)
        .map(Path::to_path_buf)
        .collect();
    assert_eq!(
        archived,
        vec![
            dest.join("2020-06-01_12-00.png"),
            dest.join("2020-06-02_12-00.png"),
            dest.join("2020-06-04_12-00.png"),
            dest.join("2020-06-05_12-00.png"),
        ]
    );
    assert!(archived.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!dest.join("2020-06-03_12-00.png").exists());
}
