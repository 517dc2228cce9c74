//! Line reading for content files

use std::fs;
use std::path::Path;

/// Read a file as lines
///
/// Invalid UTF-8 is replaced with U+FFFD. `\r\n`, `\n` and a lone `\r` all
/// end a line; a final terminator does not start an extra empty line.
pub(crate) fn read_lines_lossy(path: &Path) -> std::io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                chars.next_if_eq(&'\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("", &[])]
    #[case("a", &["a"])]
    #[case("a\n", &["a"])]
    #[case("a\r\nb", &["a", "b"])]
    #[case("a\rb\rc", &["a", "b", "c"])]
    #[case("\n\nx", &["", "", "x"])]
    #[case("a\r\r\nb\n", &["a", "", "b"])]
    fn test_split_lines(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_lines(input), expected);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"Caf\xe9\nok\n").unwrap();
        assert_eq!(
            read_lines_lossy(&path).unwrap(),
            vec!["Caf\u{FFFD}".to_string(), "ok".to_string()]
        );
    }
}
