//! Recipe image link resolution.
//!
//! Users paste share links, recipe pages or direct image links; the resolver
//! follows them to something an `<img>` tag can display.

mod html;
mod resolver;

pub use html::find_image_reference;
pub use resolver::{ImageResolver, ImageResolverConfig, ImageResolverConfigBuilder};
