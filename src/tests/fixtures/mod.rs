use std::fs;
use std::path::Path;

/// Read an index-page fixture from src/tests/fixtures by bare name.
pub fn load_html_fixture(name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", name));
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", path.display()))
}
