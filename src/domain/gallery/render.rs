//! HTML for each gallery state. Class names target the site's Tailwind build.
//!
//! Dynamic text is escaped by maud; URLs from the feed only reach `href`/`src`
//! when they are http(s).

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{InstagramProfile, SKELETON_TILES};
use crate::domain::instagram::Post;

const GRID_CLASSES: &str = "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4";
const ALT_TEXT_LIMIT: usize = 100;
const DEFAULT_ALT: &str = "Instagram Post";
const DEFAULT_OVERLAY: &str = "View on Instagram";

const INSTAGRAM_GLYPH_PATH: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z";

/// Returns `raw` only if it parses as an absolute http or https URL
pub fn safe_url(raw: &str) -> Option<&str> {
    match url::Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(raw),
        _ => None,
    }
}

pub fn skeleton() -> Markup {
    html! {
        div class=(format!("{} animate-pulse", GRID_CLASSES)) {
            @for _ in 0..SKELETON_TILES {
                div class="aspect-square bg-gray-200 rounded-xl" {}
            }
        }
    }
}

pub fn fallback(profile: &InstagramProfile) -> Markup {
    html! {
        div class="instagram-fallback text-center py-10 bg-gray-50 rounded-xl border border-gray-100" {
            p class="text-gray-500 font-medium" { "Follow us on Instagram to see our latest work" }
            a href=(profile.url()) target="_blank" rel="noopener noreferrer"
                class="mt-4 inline-block px-6 py-2 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-full font-bold shadow-lg hover:shadow-xl transition-all transform hover:-translate-y-1" {
                "@" (profile.handle)
            }
        }
    }
}

pub fn grid(posts: &[Post], profile: &InstagramProfile) -> Markup {
    html! {
        div class=(format!("instagram-grid {}", GRID_CLASSES)) {
            @for post in posts {
                (tile(post, profile))
            }
        }
    }
}

fn tile(post: &Post, profile: &InstagramProfile) -> Markup {
    let href = match safe_url(&post.permalink) {
        Some(permalink) => permalink.to_string(),
        None => {
            tracing::warn!(post_id = %post.id, "Post permalink is not http(s), linking to profile");
            profile.url()
        }
    };
    let src = post.display_url().and_then(safe_url);
    let alt: String = if post.caption.is_empty() {
        DEFAULT_ALT.to_string()
    } else {
        post.caption.chars().take(ALT_TEXT_LIMIT).collect()
    };
    let overlay = if post.caption.is_empty() {
        DEFAULT_OVERLAY
    } else {
        post.caption.as_str()
    };

    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" data-post-id=(post.id)
            class="instagram-tile group relative block overflow-hidden rounded-xl aspect-square shadow-md hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-1" {
            @if let Some(src) = src {
                img src=(src) alt=(alt) loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110";
            }
            div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-end p-4" {
                p class="text-white text-xs md:text-sm font-medium line-clamp-2" { (overlay) }
            }
            div class="absolute top-2 right-2 opacity-80 drop-shadow-md" {
                svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
                    fill="white" class="w-5 h-5 md:w-6 md:h-6" {
                    path d=(INSTAGRAM_GLYPH_PATH) {}
                }
            }
        }
    }
}

/// Full page: the skeleton is served immediately and replaced once by the
/// settled fragment, or by the fallback if that request fails.
pub fn page(fragment_path: &str, profile: &InstagramProfile) -> Markup {
    let script = format!(
        r#"(function () {{
  var root = document.getElementById("instagram-gallery");
  var fallback = document.getElementById("instagram-gallery-fallback");
  fetch({fragment})
    .then(function (res) {{
      if (!res.ok) throw new Error("gallery fragment " + res.status);
      return res.text();
    }})
    .then(function (html) {{ root.innerHTML = html; }})
    .catch(function (err) {{
      console.error(err);
      root.innerHTML = fallback.innerHTML;
    }});
}})();"#,
        fragment = serde_json::Value::from(fragment_path),
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Our work on Instagram" }
            }
            body {
                section id="instagram-gallery" { (skeleton()) }
                template id="instagram-gallery-fallback" { (fallback(profile)) }
                script { (PreEscaped(script)) }
            }
        }
    }
}
