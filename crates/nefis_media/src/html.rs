//! Image references in HTML pages.

use regex::Regex;
use std::sync::LazyLock;

/// `<meta property="og:image" content="...">`
static OG_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+property=["']og:image["'][^>]+content=["']([^"']+)["']"#)
        .expect("Invalid og:image regex")
});

/// `<meta name="twitter:image" content="...">`
static TWITTER_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+name=["']twitter:image["'][^>]+content=["']([^"']+)["']"#)
        .expect("Invalid twitter:image regex")
});

/// First `<img src="...">`
static IMG_SRC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("Invalid img src regex")
});

/// The page's preferred image reference, as written in the markup.
///
/// Checks `og:image`, then `twitter:image`, then the first `<img>`. The
/// reference may be relative.
pub fn find_image_reference(html: &str) -> Option<&str> {
    [&*OG_IMAGE_REGEX, &*TWITTER_IMAGE_REGEX, &*IMG_SRC_REGEX]
        .into_iter()
        .find_map(|regex| regex.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
