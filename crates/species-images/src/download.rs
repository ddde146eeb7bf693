//! Writing images into a species directory with unique filenames

use crate::error::Result;
use crate::fetch::ImageFetcher;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extension used when a name has none, unless the backend says otherwise
pub(crate) const DEFAULT_EXTENSION: &str = "jpg";

/// Append `.ext` when an extension is given
fn with_extension(base: String, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{}.{}", base, ext),
        None => base,
    }
}

/// Filename for the image at 1-based `index`: the URL's last path segment,
/// or `image_<index>` plus `default_extension` when the URL has none.
pub fn filename_from_url(url: &str, index: usize, default_extension: Option<&str>) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .map(str::to_string)
        })
        .unwrap_or_else(|| with_extension(format!("image_{}", index), default_extension))
}

/// Downloads one species' images into its directory.
///
/// Keeps the set of filenames handed out so far; it lives only as long as
/// the species is being processed.
pub struct SpeciesDownloader<'a, F: ?Sized> {
    fetcher: &'a F,
    dir: PathBuf,
    default_extension: Option<&'static str>,
    used: HashSet<String>,
}

impl<'a, F> SpeciesDownloader<'a, F>
where
    F: ImageFetcher + ?Sized,
{
    pub fn new(fetcher: &'a F, dir: PathBuf) -> Self {
        Self {
            fetcher,
            dir,
            default_extension: Some(DEFAULT_EXTENSION),
            used: HashSet::new(),
        }
    }

    /// Extension for placeholder names and suffixed names that have none;
    /// `None` leaves such names bare
    pub fn with_default_extension(mut self, extension: Option<&'static str>) -> Self {
        self.default_extension = extension;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Pick and reserve the filename for the image at 1-based `index`.
    ///
    /// A name already handed out gets `_<index>` inserted before its
    /// extension, then `_<n>` (n = 2, 3, ...) until it is unused.
    /// Names without an extension take the default one, if any.
    pub fn reserve_filename(&mut self, url: &str, index: usize) -> String {
        let name = filename_from_url(url, index, self.default_extension);
        let name = if self.used.contains(&name) {
            self.suffixed(&name, index)
        } else {
            name
        };
        self.used.insert(name.clone());
        name
    }

    fn suffixed(&self, name: &str, index: usize) -> String {
        let path = Path::new(name);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .or(self.default_extension);

        let mut candidate = with_extension(format!("{}_{}", stem, index), extension);
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = with_extension(format!("{}_{}_{}", stem, index, n), extension);
            n += 1;
        }
        candidate
    }

    /// Fetch `url` and write it under the species directory, creating the
    /// directory if needed and overwriting any file left by an earlier run.
    ///
    /// The filename stays reserved even when the download fails.
    pub async fn download(&mut self, url: &str, index: usize) -> Result<PathBuf> {
        let filename = self.reserve_filename(url, index);
        let destination = self.dir.join(filename);

        tokio::fs::create_dir_all(&self.dir).await?;
        let data = self.fetcher.fetch(url).await?;
        tokio::fs::write(&destination, data).await?;

        Ok(destination)
    }
}
