//! File URL generation.
//!
//! Stored files carry stream-wrapper URIs (`public://images/a.jpg`). They are
//! first expanded to absolute URLs under the site URL, then made relative when
//! they point back at the site itself, so the front end can serve them from
//! whatever host it runs on.

use anyhow::{Context, Result};
use url::{Position, Url};

/// Path under which `private://` files are served.
const PRIVATE_FILES_PATH: &str = "/system/files";

/// Turns stored file URIs into root-relative URLs.
#[derive(Debug, Clone)]
pub struct FileUrlGenerator {
    site_url: Url,
    public_path: String,
}

impl FileUrlGenerator {
    /// Create a generator for the given site URL and public files path
    /// (e.g. `http://localhost:3000` and `/sites/default/files`).
    pub fn new(site_url: &str, public_path: &str) -> Result<Self> {
        let site_url = Url::parse(site_url).context("SITE_URL must be an absolute URL")?;
        let public_path = format!("/{}", public_path.trim_matches('/'));
        Ok(Self {
            site_url,
            public_path,
        })
    }

    /// Expand a stored URI to an absolute URL.
    ///
    /// The target is appended below the site URL's own path one segment at a
    /// time, so `#`, `?` and `%` in file names are percent-encoded. Returns
    /// `None` for URIs with an unsupported scheme or an empty target.
    pub fn absolute(&self, uri: &str) -> Option<Url> {
        let (scheme, target) = uri.split_once("://")?;
        let files_path = match scheme {
            "public" => self.public_path.as_str(),
            "private" => PRIVATE_FILES_PATH,
            "http" | "https" => return Url::parse(uri).ok(),
            _ => return None,
        };
        let target = target.trim_start_matches('/');
        if target.is_empty() {
            return None;
        }

        let mut url = self.site_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(files_path.split('/').filter(|s| !s.is_empty()))
            .extend(target.split('/'));
        Some(url)
    }

    /// Expand a stored URI and strip the origin when it is the site's own.
    pub fn relative(&self, uri: &str) -> Option<String> {
        let url = self.absolute(uri)?;
        if url.origin() == self.site_url.origin() {
            Some(url[Position::BeforePath..].to_string())
        } else {
            Some(url.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn generator() -> FileUrlGenerator {
        FileUrlGenerator::new("https://www.example.com", "sites/default/files/").unwrap()
    }

    #[test]
    fn public_uri_becomes_root_relative() {
        assert_eq!(
            generator().relative("public://2019-05/hero.jpg").as_deref(),
            Some("/sites/default/files/2019-05/hero.jpg")
        );
    }

    #[test]
    fn private_uri_uses_system_path() {
        assert_eq!(
            generator().relative("private://docs/cv.pdf").as_deref(),
            Some("/system/files/docs/cv.pdf")
        );
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(
            generator().relative("public://my photo.png").as_deref(),
            Some("/sites/default/files/my%20photo.png")
        );
    }

    #[test]
    fn reserved_characters_stay_in_the_file_name() {
        let g = generator();
        assert_eq!(
            g.relative("public://photo#1.jpg").as_deref(),
            Some("/sites/default/files/photo%231.jpg")
        );
        assert_eq!(
            g.relative("public://what?.png").as_deref(),
            Some("/sites/default/files/what%3F.png")
        );
        assert_eq!(
            g.relative("private://reports/100%25.pdf").as_deref(),
            Some("/system/files/reports/100%2525.pdf")
        );
    }

    #[test]
    fn site_url_base_path_is_kept() {
        let g = FileUrlGenerator::new("https://www.example.com/drupal", "/sites/default/files")
            .unwrap();
        assert_eq!(
            g.relative("public://a.jpg").as_deref(),
            Some("/drupal/sites/default/files/a.jpg")
        );
        assert_eq!(
            g.absolute("public://2019-05/a.jpg").unwrap().as_str(),
            "https://www.example.com/drupal/sites/default/files/2019-05/a.jpg"
        );

        let trailing =
            FileUrlGenerator::new("https://www.example.com/drupal/", "sites/default/files")
                .unwrap();
        assert_eq!(
            trailing.relative("public://a.jpg").as_deref(),
            Some("/drupal/sites/default/files/a.jpg")
        );
    }

    #[test]
    fn same_origin_absolute_url_is_made_relative() {
        assert_eq!(
            generator()
                .relative("https://www.example.com/themes/logo.svg?v=2")
                .as_deref(),
            Some("/themes/logo.svg?v=2")
        );
    }

    #[test]
    fn foreign_origin_is_kept_absolute() {
        assert_eq!(
            generator()
                .relative("https://cdn.example.net/logo.svg")
                .as_deref(),
            Some("https://cdn.example.net/logo.svg")
        );
    }

    #[test]
    fn unsupported_or_empty_uris_do_not_resolve() {
        let g = generator();
        assert!(g.relative("temporary://upload.tmp").is_none());
        assert!(g.relative("public://").is_none());
        assert!(g.relative("not a uri").is_none());
    }

    #[test]
    fn rejects_relative_site_url() {
        assert!(FileUrlGenerator::new("/relative", "/files").is_err());
    }
}
