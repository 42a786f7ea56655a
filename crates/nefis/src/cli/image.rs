//! Image link command handler.

use nefis::{AppConfig, ImageResolver, NefisResult};
use tracing::info;

/// Handles the resolve-image command.
///
/// Prints the resolved URL, or the input unchanged when nothing better was
/// found.
#[tracing::instrument(skip(config))]
pub async fn handle_resolve_image_command(config: &AppConfig, url: &str) -> NefisResult<()> {
    let resolver = ImageResolver::new(*config.images())?;
    let resolved = resolver.resolve_or_original(url).await;
    info!(changed = resolved != url, "Image link checked");
    println!("{}", resolved);
    Ok(())
}
