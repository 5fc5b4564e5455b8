use crate::e2e::helpers;

use helpers::{fixtures, instagram_mocks, TestContext, TestOptions, TEST_HANDLE, TEST_TOKEN};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

const FALLBACK_TEXT: &str = "Follow us on Instagram to see our latest work";

fn tile_count(html: &str) -> usize {
    html.matches("instagram-tile").count()
}

async fn gallery_fed_with(status: u16, body: &str) -> (TestContext, String) {
    let ctx = TestContext::start_with(TestOptions {
        token: Some(TEST_TOKEN),
        feed_path: Some("/fake-feed"),
        ..TestOptions::default()
    })
    .await;
    instagram_mocks::mount_feed(&ctx.instagram, "/fake-feed", status, body).await;

    let response = ctx.client.get("/gallery/fragment").await.unwrap();
    response.assert_status(StatusCode::OK);
    let html = response.text();
    (ctx, html)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_at_most_twelve_tiles(ctx: &TestContext) {
    instagram_mocks::mount_media(&ctx.instagram, fixtures::image_page(20)).await;

    let response = ctx.client.get("/gallery/fragment").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/html; charset=utf-8");
    let html = response.text();

    assert_eq!(tile_count(&html), 12);
    for n in 0..12 {
        assert!(
            html.contains(&format!(r#"href="https://www.instagram.com/p/post{}/""#, n)),
            "missing tile for post {}",
            n
        );
    }
    assert!(!html.contains("https://www.instagram.com/p/post12/"));
    assert!(!html.contains(FALLBACK_TEXT));
    assert!(!html.contains("animate-pulse"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_video_thumbnail_as_image(ctx: &TestContext) {
    instagram_mocks::mount_media(
        &ctx.instagram,
        fixtures::media_page(vec![fixtures::video_item()]),
    )
    .await;

    let html = ctx.client.get("/gallery/fragment").await.unwrap().text();

    assert_eq!(tile_count(&html), 1);
    assert!(html.contains(r#"src="https://scontent.cdninstagram.com/clip-thumb.jpg""#));
    assert!(!html.contains("clip.mp4"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_placeholder_caption_for_uncaptioned_posts(ctx: &TestContext) {
    instagram_mocks::mount_media(
        &ctx.instagram,
        fixtures::media_page(vec![fixtures::uncaptioned_carousel_item()]),
    )
    .await;

    let html = ctx.client.get("/gallery/fragment").await.unwrap().text();

    assert!(html.contains(">View on Instagram</p>"));
    assert!(html.contains(r#"alt="Instagram Post""#));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_remaining_tiles_when_an_item_is_unlinked(ctx: &TestContext) {
    instagram_mocks::mount_media(
        &ctx.instagram,
        fixtures::media_page(vec![
            fixtures::image_item(1),
            fixtures::unlinked_item(2),
            fixtures::image_item(3),
        ]),
    )
    .await;

    let html = ctx.client.get("/gallery/fragment").await.unwrap().text();

    assert_eq!(tile_count(&html), 2);
    assert!(!html.contains(FALLBACK_TEXT));
}

#[tokio::test]
async fn it_should_link_non_http_permalinks_to_profile() {
    let body = r#"[{
        "id": "1",
        "caption": "Trim work",
        "media_url": "https://scontent.cdninstagram.com/1.jpg",
        "permalink": "javascript:alert(1)",
        "media_type": "IMAGE"
    }]"#;
    let (_ctx, html) = gallery_fed_with(200, body).await;

    assert_eq!(tile_count(&html), 1);
    assert!(!html.contains("javascript:"));
    assert!(html.contains(&format!(r#"href="https://www.instagram.com/{}/""#, TEST_HANDLE)));
    assert!(html.contains(r#"src="https://scontent.cdninstagram.com/1.jpg""#));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_fallback_for_empty_feed(ctx: &TestContext) {
    instagram_mocks::mount_media(&ctx.instagram, fixtures::media_page(vec![])).await;

    let html = ctx.client.get("/gallery/fragment").await.unwrap().text();

    assert_eq!(tile_count(&html), 0);
    assert!(html.contains(FALLBACK_TEXT));
    assert!(html.contains(&format!("https://www.instagram.com/{}/", TEST_HANDLE)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_fallback_when_instagram_fails(ctx: &TestContext) {
    instagram_mocks::mount_media_status(&ctx.instagram, 404).await;

    let response = ctx.client.get("/gallery/fragment").await.unwrap();

    // The fallback is a normal page for visitors
    response.assert_status(StatusCode::OK);
    let html = response.text();
    assert_eq!(tile_count(&html), 0);
    assert!(html.contains(FALLBACK_TEXT));
    assert!(!html.contains("Not Found"));
}

#[tokio::test]
async fn it_should_render_fallback_without_token() {
    let ctx = TestContext::start(None).await;

    let html = ctx.client.get("/gallery/fragment").await.unwrap().text();

    assert_eq!(tile_count(&html), 0);
    assert!(html.contains(FALLBACK_TEXT));
    assert!(!html.contains("token"));
}

#[tokio::test]
async fn it_should_render_fallback_for_error_body_with_success_status() {
    let (_ctx, html) = gallery_fed_with(200, r#"{"error":"x"}"#).await;

    assert_eq!(tile_count(&html), 0);
    assert!(html.contains(FALLBACK_TEXT));
}

#[tokio::test]
async fn it_should_render_fallback_for_non_array_body() {
    let (_ctx, html) = gallery_fed_with(200, r#"{"posts":[]}"#).await;

    assert_eq!(tile_count(&html), 0);
    assert!(html.contains(FALLBACK_TEXT));
}

#[tokio::test]
async fn it_should_render_fallback_for_invalid_json() {
    let (_ctx, html) = gallery_fed_with(200, "<html>oops</html>").await;

    assert!(html.contains(FALLBACK_TEXT));
}

#[tokio::test]
async fn it_should_render_fallback_when_feed_endpoint_is_down() {
    let (_ctx, html) = gallery_fed_with(503, "").await;

    assert!(html.contains(FALLBACK_TEXT));
}

#[tokio::test]
async fn it_should_request_feed_once_per_mount() {
    let ctx = TestContext::start_with(TestOptions {
        token: Some(TEST_TOKEN),
        feed_path: Some("/fake-feed"),
        ..TestOptions::default()
    })
    .await;
    instagram_mocks::mount_feed(&ctx.instagram, "/fake-feed", 200, "[]").await;

    ctx.client.get("/gallery/fragment").await.unwrap();
    assert_eq!(instagram_mocks::outbound_request_count(&ctx.instagram).await, 1);

    // Remounting is the only way to try again
    ctx.client.get("/gallery/fragment").await.unwrap();
    assert_eq!(instagram_mocks::outbound_request_count(&ctx.instagram).await, 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_page_shell_with_skeleton(ctx: &TestContext) {
    let response = ctx.client.get("/gallery").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/html; charset=utf-8");
    let html = response.text();

    assert_eq!(html.matches("aspect-square bg-gray-200").count(), 8);
    assert!(html.contains(r#"fetch("/gallery/fragment")"#));
    assert_eq!(tile_count(&html), 0);

    // Rendering the shell does not touch the feed
    assert_eq!(instagram_mocks::outbound_request_count(&ctx.instagram).await, 0);
}
