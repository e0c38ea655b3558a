//! Splitting delimited text into rows of cells

/// Split tab-separated text into rows
///
/// A cell starting with `"` is quoted: it may contain tabs and newlines,
/// and `""` inside it stands for one quote. A trailing newline does not
/// produce an extra row.
pub(super) fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut at_cell_start = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }

        match c {
            '"' if at_cell_start => {
                in_quotes = true;
                at_cell_start = false;
            }
            '\t' => {
                row.push(std::mem::take(&mut cell));
                at_cell_start = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                at_cell_start = true;
            }
            _ => {
                cell.push(c);
                at_cell_start = false;
            }
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows_plain() {
        assert_eq!(
            split_rows("a\tb\nc\td"),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
    }

    #[test]
    fn test_split_rows_keeps_empty_cells() {
        assert_eq!(split_rows("a\t\tb\n"), vec![vec!["a", "", "b"]]);
    }

    #[test]
    fn test_split_rows_empty_line() {
        assert_eq!(split_rows("a\n\nb\n"), vec![vec!["a"], vec![""], vec!["b"]]);
    }

    #[test]
    fn test_split_rows_quoted_newline() {
        assert_eq!(
            split_rows("\"two\nlines\"\tx\n"),
            vec![vec!["two\nlines", "x"]]
        );
    }

    #[test]
    fn test_split_rows_quote_inside_cell_is_literal() {
        assert_eq!(split_rows("O\"Brien\n"), vec![vec!["O\"Brien"]]);
    }
}
