//! Helper functions for template tests

/// Wrap body markup in a minimal SVG document
pub fn svg(body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm">{}</svg>"#,
        body
    )
}

/// Two-by-two badge sheet with NAME and AFFILIATION fields
pub fn four_up_sheet() -> String {
    let mut body = String::new();
    for n in 1..=4 {
        body.push_str(&format!(
            "<g id=\"badge{n}\"><text>PXTAG_NAME{n}</text><text>PXTAG_AFFILIATION{n}</text></g>"
        ));
    }
    svg(&body)
}
