//! Image resolver against a local mock server.

use nefis_media::{ImageResolver, ImageResolverConfig, ImageResolverConfigBuilder};

fn resolver() -> ImageResolver {
    ImageResolver::new(ImageResolverConfig::default()).unwrap()
}

#[tokio::test]
async fn test_direct_image_is_returned_without_get() {
    let mut server = mockito::Server::new_async().await;
    let head = server
        .mock("HEAD", "/photo.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .create_async()
        .await;
    let get = server
        .mock("GET", "/photo.png")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let url = format!("{}/photo.png", server.url());
    assert_eq!(resolver().resolve(&url).await, Some(url.clone()));

    head.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_get_reveals_image_when_head_does_not() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("HEAD", "/dl")
        .with_status(405)
        .create_async()
        .await;
    server
        .mock("GET", "/dl")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(vec![0xFF, 0xD8, 0xFF])
        .create_async()
        .await;

    let url = format!("{}/dl", server.url());
    assert_eq!(resolver().resolve(&url).await, Some(url.clone()));
}

#[tokio::test]
async fn test_relative_og_image_is_made_absolute() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("HEAD", "/recipes/menemen")
        .with_status(200)
        .with_header("content-type", "text/html")
        .create_async()
        .await;
    server
        .mock("GET", "/recipes/menemen")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(
            r#"<html><head><meta property="og:image" content="/img/menemen.jpg"></head>
            <body><p>Menemen</p></body></html>"#,
        )
        .create_async()
        .await;

    let url = format!("{}/recipes/menemen", server.url());
    assert_eq!(
        resolver().resolve(&url).await,
        Some(format!("{}/img/menemen.jpg", server.url()))
    );
}

#[tokio::test]
async fn test_redirect_is_followed_to_final_url() {
    let mut server = mockito::Server::new_async().await;
    let target = format!("{}/images/final.webp", server.url());
    server
        .mock("HEAD", "/s/abc")
        .with_status(302)
        .with_header("location", &target)
        .create_async()
        .await;
    server
        .mock("HEAD", "/images/final.webp")
        .with_status(200)
        .with_header("content-type", "image/webp")
        .create_async()
        .await;

    let short = format!("{}/s/abc", server.url());
    assert_eq!(resolver().resolve(&short).await, Some(target));
}

#[tokio::test]
async fn test_page_without_images_is_a_miss() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("HEAD", "/plain")
        .with_status(200)
        .with_header("content-type", "text/html")
        .create_async()
        .await;
    server
        .mock("GET", "/plain")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<p>No pictures here</p>")
        .create_async()
        .await;

    let url = format!("{}/plain", server.url());
    let resolver = resolver();
    assert_eq!(resolver.resolve(&url).await, None);
    assert_eq!(resolver.resolve_or_original(&url).await, url);
}

#[tokio::test]
async fn test_network_failure_is_a_miss() {
    let config = ImageResolverConfigBuilder::default()
        .head_timeout_secs(1u64)
        .get_timeout_secs(1u64)
        .build()
        .unwrap();
    let resolver = ImageResolver::new(config).unwrap();

    assert_eq!(resolver.resolve("http://127.0.0.1:1/photo.jpg").await, None);
    assert_eq!(
        resolver.resolve_or_original("http://127.0.0.1:1/photo.jpg").await,
        "http://127.0.0.1:1/photo.jpg"
    );
}

#[tokio::test]
async fn test_blank_and_invalid_input_is_a_miss() {
    let resolver = resolver();
    assert_eq!(resolver.resolve("").await, None);
    assert_eq!(resolver.resolve("   ").await, None);
    assert_eq!(resolver.resolve("not a url").await, None);
}
