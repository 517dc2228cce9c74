//! Editable news snippets

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ContentError, Result};
use crate::text::read_lines_lossy;

/// Access to the news files under the repository config directory
///
/// Only names in the acceptable list can be read or written. With an empty
/// list nothing is accepted.
#[derive(Debug, Clone)]
pub struct NewsService {
    news_dir: PathBuf,
    acceptable_filenames: Vec<String>,
}

impl NewsService {
    pub fn new(repository_dir: impl AsRef<Path>, acceptable_filenames: Vec<String>) -> Self {
        Self {
            news_dir: crate::config_dir(repository_dir.as_ref()),
            acceptable_filenames,
        }
    }

    /// Directory the news files live in
    pub fn news_file_path(&self) -> &Path {
        &self.news_dir
    }

    /// Whether `name` is one of the acceptable news files
    pub fn validate(&self, name: &str) -> bool {
        self.acceptable_filenames.iter().any(|n| n == name)
    }

    /// Read a news file
    ///
    /// Lines are concatenated without separators. An unreadable file is
    /// logged and read as empty.
    pub fn read_news_file(&self, name: &str) -> Result<String> {
        let path = self.checked_path(name)?;
        match read_joined(&path) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("news_read: {}: {}", path.display(), e);
                Ok(String::new())
            }
        }
    }

    /// Write `news` verbatim to a news file and return it
    pub fn write_news_file(&self, name: &str, news: &str) -> Result<String> {
        let path = self.checked_path(name)?;
        fs::write(&path, news).map_err(|e| {
            tracing::warn!("news_write: {}: {}", path.display(), e);
            ContentError::io(&path, e)
        })?;
        Ok(news.to_string())
    }

    fn checked_path(&self, name: &str) -> Result<PathBuf> {
        if !self.validate(name) {
            return Err(ContentError::InvalidNewsFile(name.to_string()));
        }
        Ok(self.news_dir.join(name))
    }
}

fn read_joined(path: &Path) -> std::io::Result<String> {
    Ok(read_lines_lossy(path)?.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn repository() -> (TempDir, NewsService) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        let service = NewsService::new(
            dir.path(),
            vec!["news-top.html".to_string(), "news-side.html".to_string()],
        );
        (dir, service)
    }

    #[rstest]
    #[case("news-top.html", true)]
    #[case("news-side.html", true)]
    #[case("news-footer.html", false)]
    #[case("../news-top.html", false)]
    #[case("", false)]
    fn test_validate(#[case] name: &str, #[case] valid: bool) {
        let (_dir, service) = repository();
        assert_eq!(service.validate(name), valid);
    }

    #[test]
    fn test_empty_list_accepts_nothing() {
        let dir = TempDir::new().unwrap();
        let service = NewsService::new(dir.path(), Vec::new());
        assert!(!service.validate("news-top.html"));
        assert!(matches!(
            service.read_news_file("news-top.html"),
            Err(ContentError::InvalidNewsFile(_))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let (dir, service) = repository();
        let written = service
            .write_news_file("news-top.html", "<p>Hello</p>\n<p>World</p>\n")
            .unwrap();
        assert_eq!(written, "<p>Hello</p>\n<p>World</p>\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("config/news-top.html")).unwrap(),
            "<p>Hello</p>\n<p>World</p>\n"
        );
        assert_eq!(
            service.read_news_file("news-top.html").unwrap(),
            "<p>Hello</p><p>World</p>"
        );
    }

    #[test]
    fn test_invalid_utf8_news_keeps_content() {
        let (dir, service) = repository();
        fs::write(
            dir.path().join("config/news-top.html"),
            b"<p>Caf\xe9 news</p>\n<p>more</p>\n",
        )
        .unwrap();
        assert_eq!(
            service.read_news_file("news-top.html").unwrap(),
            "<p>Caf\u{FFFD} news</p><p>more</p>"
        );
    }

    #[test]
    fn test_carriage_returns_end_lines() {
        let (dir, service) = repository();
        fs::write(dir.path().join("config/news-side.html"), "a\rb\rc").unwrap();
        assert_eq!(service.read_news_file("news-side.html").unwrap(), "abc");
    }

    #[test]
    fn test_missing_news_reads_empty() {
        let (_dir, service) = repository();
        assert_eq!(service.read_news_file("news-side.html").unwrap(), "");
    }

    #[test]
    fn test_invalid_write_rejected() {
        let (dir, service) = repository();
        let err = service.write_news_file("evil.html", "x").unwrap_err();
        assert_eq!(err.to_string(), "The file evil.html is not a valid news file");
        assert!(!dir.path().join("config/evil.html").exists());
    }

    #[test]
    fn test_news_file_path() {
        let (dir, service) = repository();
        assert_eq!(service.news_file_path(), dir.path().join("config"));
    }
}
