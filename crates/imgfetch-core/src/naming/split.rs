//! Splitting a URL's trailing segment into base name and extension.

/// Trailing path segment of a URL, split at its final dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFileName {
    /// Everything after the final `/`.
    pub file_name: String,
    /// `file_name` without the final `.` and extension.
    pub base_name: String,
    /// Text after the final `.`; empty when `file_name` has no dot.
    pub extension: String,
}

impl UrlFileName {
    /// Splits the trailing segment of `url` (raw text after the final `/`).
    ///
    /// Returns `None` for blank input or when the segment is empty, `.` or `..`.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        let file_name = match url.rfind('/') {
            Some(idx) => &url[idx + 1..],
            None => url,
        };
        if file_name.is_empty() || file_name == "." || file_name == ".." {
            return None;
        }
        let (base_name, extension) = match file_name.rfind('.') {
            Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
            None => (file_name, ""),
        };
        Some(Self {
            file_name: file_name.to_string(),
            base_name: base_name.to_string(),
            extension: extension.to_string(),
        })
    }

    /// Name for the given suffix: the bare file name for 0, else `base.N.ext`
    /// (`base.N` when there is no extension).
    pub fn candidate(&self, suffix: u32) -> String {
        if suffix == 0 {
            self.file_name.clone()
        } else if self.extension.is_empty() {
            format!("{}.{}", self.base_name, suffix)
        } else {
            format!("{}.{}.{}", self.base_name, suffix, self.extension)
        }
    }
}
