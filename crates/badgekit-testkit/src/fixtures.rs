//! Fixture builders for templates and attendee tables

use std::path::{Path, PathBuf};

/// SVG sheet with `capacity` badges, each showing the given fields
///
/// Badge `n` contains one `<text>` per field: `PXTAG_{FIELD}{n}`.
pub fn badge_sheet(capacity: usize, fields: &[&str]) -> String {
    let mut body = String::new();
    for n in 1..=capacity {
        body.push_str(&format!("  <g id=\"badge{}\">\n", n));
        for field in fields {
            body.push_str(&format!("    <text>PXTAG_{}{}</text>\n", field, n));
        }
        body.push_str("  </g>\n");
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"210mm\" height=\"297mm\">\n\
         {}</svg>\n",
        body
    )
}

/// Tab-separated table with a header and one row per entry of `rows`
pub fn people_tsv(header: &[&str], rows: &[&[&str]]) -> String {
    let mut text = header.join("\t");
    text.push('\n');
    for row in rows {
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    text
}

/// Write `content` to `dir/name`, returning the path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write fixture {}: {}", path.display(), e));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_sheet_contains_every_token() {
        let sheet = badge_sheet(2, &["NAME", "AFFILIATION"]);
        for token in ["PXTAG_NAME1", "PXTAG_NAME2", "PXTAG_AFFILIATION1", "PXTAG_AFFILIATION2"] {
            assert!(sheet.contains(token), "missing {}", token);
        }
        assert!(!sheet.contains("PXTAG_NAME3"));
    }

    #[test]
    fn test_people_tsv_layout() {
        let tsv = people_tsv(&["NAME", "EMAIL"], &[&["Alice", "a@x.org"]]);
        assert_eq!(tsv, "NAME\tEMAIL\nAlice\ta@x.org\n");
    }
}
