//! # Portfolio Site
//!
//! A single-page personal portfolio, generated as one static `index.html`.
//! The content (profile, certifications, skills, education) is compiled in;
//! `site/config.toml` only tunes presentation: page metadata, contact links,
//! and the two color palettes.
//!
//! # Architecture
//!
//! ```text
//! catalog ──┐
//! config  ──┼──▶ render(theme) ──▶ Markup ──▶ generate ──▶ dist/index.html
//! theme   ──┘                         │
//!                                     └── inline runtime + RuntimeConfig JSON
//! ```
//!
//! Rendering is a pure function of `(Theme, &Catalog, &SiteConfig)`. Everything
//! that happens after the page loads (theme toggle, smooth scroll, reveal on
//! scroll, photo fallback) is done by a small hand-written script,
//! `static/runtime.js`. [`interact::PageModel`] is the reference model of that
//! behavior: a message/effect state machine with unit tests, which the browser
//! tests in `tests/browser_page.rs` check the script against. The two share
//! only the constants in [`interact::RuntimeConfig`], which the renderer
//! embeds as JSON for the script to read.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Compiled-in content and icon-tag resolution |
//! | [`theme`] | `Theme` and the themed `Surface` class vocabulary |
//! | [`icons`] | Inline SVG glyphs |
//! | [`render`] | Maud page renderer, one function per section |
//! | [`interact`] | Theme/scroll/reveal state machine and the embedded runtime config |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, CSS palette |
//! | [`generate`] | Writes `index.html` and copies static assets |
//! | [`audit`] | Catalog consistency findings for `check` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Themes As Class Modifiers
//!
//! Every themed element carries `base base--dark` (or `--light`) plus a
//! `data-surface="base"` attribute. Toggling rewrites one modifier per
//! element; no stylesheet swap, no re-render, no flash. The renderer takes
//! the theme as an argument, so a light-first page is one call away.
//!
//! ## No Persistence
//!
//! Every load starts dark. The theme lives in memory for the life of the page
//! and nowhere else: no cookies, no `localStorage`.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod generate;
pub mod icons;
pub mod interact;
pub mod output;
pub mod render;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
