//! Page interaction model: theme toggle, smooth-scroll navigation, and
//! scroll-reveal.
//!
//! The behaviors are expressed as a message/update/effect state machine.
//! [`PageModel`] owns the only mutable state on the page (the [`Theme`] and the
//! reveal registrations); [`PageModel::update`] consumes a [`Msg`] and returns
//! the [`Effect`]s the host must apply to the document.
//!
//! This is the reference model. The page itself runs `static/runtime.js`, a
//! separate implementation that reads its constants from the
//! [`RuntimeConfig`] serialized into the page; `tests/browser_page.rs` checks
//! the script's observable behavior against the transitions below.
//!
//! ```text
//!  click toggle      ─▶ Msg::ToggleTheme       ─▶ SetRootClass, SwapSurfaces
//!  click #experience ─▶ Msg::NavClicked        ─▶ PreventDefault, ScrollTo, PushFragment
//!  observer entries  ─▶ Msg::Intersections     ─▶ MarkActive + Unobserve (once per target)
//!  page hide         ─▶ Msg::Dispose           ─▶ Disconnect
//!  photo error       ─▶ Msg::ImageFailed       ─▶ SwapImageSource (once)
//! ```
//!
//! Layout queries (where is an element, where is the body) belong to the host
//! and are passed in through the [`Layout`] trait, which keeps `update`
//! deterministic and testable without a browser.

use crate::theme::Theme;
use serde::Serialize;
use std::collections::BTreeMap;

/// Height of the fixed navigation bar; scroll targets land this far below
/// the viewport top so the bar does not cover them.
pub const HEADER_OFFSET: f64 = 80.0;

/// Fraction of a revealable element that must be visible to activate it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Class marking elements that animate in on first sight.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added to a revealable element once it has been seen.
pub const ACTIVE_CLASS: &str = "active";

/// Position queries the host document answers.
pub trait Layout {
    /// Viewport-relative top of the element with `id`, or `None` if no such
    /// element exists in the document right now.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Viewport-relative top of `<body>` (negative once scrolled).
    fn body_top(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ToggleTheme,
    NavClicked(String),
    Observe(Vec<String>),
    Intersections(Vec<IntersectionEntry>),
    Dispose,
    ImageFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the theme class on the document root.
    SetRootClass(Theme),
    /// Swap every themed surface's `--from` modifier for `--to`.
    SwapSurfaces { from: Theme, to: Theme },
    /// Suppress the browser's own jump-to-anchor.
    PreventDefault,
    ScrollTo { top: f64, behavior: ScrollBehavior },
    /// Set the URL fragment without reloading.
    PushFragment(String),
    MarkActive(String),
    Unobserve(String),
    Disconnect,
    SwapImageSource(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Watching,
    Active,
}

/// One-shot visibility registrations.
///
/// Each target activates at most once; after that it is no longer watched
/// and further entries for it are ignored. [`RevealWatcher::disconnect`]
/// drops every registration.
#[derive(Debug, Clone)]
pub struct RevealWatcher {
    threshold: f64,
    targets: BTreeMap<String, RevealState>,
    connected: bool,
}

impl RevealWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            targets: BTreeMap::new(),
            connected: true,
        }
    }

    /// Register a target. Already-known targets keep their state; nothing is
    /// registered after disconnect.
    pub fn observe(&mut self, target: impl Into<String>) -> bool {
        if !self.connected {
            return false;
        }
        let target = target.into();
        if self.targets.contains_key(&target) {
            return false;
        }
        self.targets.insert(target, RevealState::Watching);
        true
    }

    /// Feed observer entries; returns the targets activated by this batch.
    pub fn record(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        if !self.connected {
            return Vec::new();
        }
        let mut activated = Vec::new();
        for entry in entries {
            if entry.ratio < self.threshold {
                continue;
            }
            if let Some(state) = self.targets.get_mut(&entry.target)
                && *state == RevealState::Watching
            {
                *state = RevealState::Active;
                activated.push(entry.target.clone());
            }
        }
        activated
    }

    pub fn is_active(&self, target: &str) -> bool {
        self.targets.get(target) == Some(&RevealState::Active)
    }

    /// Number of targets still waiting to be seen.
    pub fn watching(&self) -> usize {
        self.targets
            .values()
            .filter(|s| **s == RevealState::Watching)
            .count()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.targets.clear();
    }
}

/// State of one page view.
#[derive(Debug, Clone)]
pub struct PageModel {
    theme: Theme,
    reveal: RevealWatcher,
    photo_fallback: Option<String>,
}

impl PageModel {
    /// Fresh page view: dark theme, no registrations.
    pub fn new(photo_fallback: impl Into<String>) -> Self {
        Self {
            theme: Theme::default(),
            reveal: RevealWatcher::new(REVEAL_THRESHOLD),
            photo_fallback: Some(photo_fallback.into()),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn reveal(&self) -> &RevealWatcher {
        &self.reveal
    }

    pub fn update(&mut self, msg: Msg, layout: &impl Layout) -> Vec<Effect> {
        match msg {
            Msg::ToggleTheme => {
                let from = self.theme;
                self.theme = from.toggled();
                vec![
                    Effect::SetRootClass(self.theme),
                    Effect::SwapSurfaces {
                        from,
                        to: self.theme,
                    },
                ]
            }
            Msg::NavClicked(id) => {
                let mut effects = vec![Effect::PreventDefault];
                match scroll_target(layout, &id) {
                    Some(top) => {
                        effects.push(Effect::ScrollTo {
                            top,
                            behavior: ScrollBehavior::Smooth,
                        });
                        effects.push(Effect::PushFragment(id));
                    }
                    None => log::debug!("scroll target #{id} not in document, ignoring"),
                }
                effects
            }
            Msg::Observe(targets) => {
                for target in targets {
                    self.reveal.observe(target);
                }
                Vec::new()
            }
            Msg::Intersections(entries) => self
                .reveal
                .record(&entries)
                .into_iter()
                .flat_map(|id| [Effect::MarkActive(id.clone()), Effect::Unobserve(id)])
                .collect(),
            Msg::Dispose => {
                if self.reveal.is_connected() {
                    self.reveal.disconnect();
                    vec![Effect::Disconnect]
                } else {
                    Vec::new()
                }
            }
            Msg::ImageFailed => self
                .photo_fallback
                .take()
                .map(Effect::SwapImageSource)
                .into_iter()
                .collect(),
        }
    }
}

/// Scroll position that puts the element with `id` just below the header.
///
/// Both tops are viewport-relative, so their difference is the element's
/// document position regardless of how far the page is already scrolled.
pub fn scroll_target(layout: &impl Layout, id: &str) -> Option<f64> {
    layout
        .element_top(id)
        .map(|top| top - layout.body_top() - HEADER_OFFSET)
}

/// Constants handed to the in-page runtime, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub initial_theme: Theme,
    pub header_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_class: &'static str,
    pub active_class: &'static str,
    pub scroll_behavior: ScrollBehavior,
    pub photo_fallback: String,
}

impl RuntimeConfig {
    pub fn new(initial_theme: Theme, photo_fallback: impl Into<String>) -> Self {
        Self {
            initial_theme,
            header_offset: HEADER_OFFSET,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_class: REVEAL_CLASS,
            active_class: ACTIVE_CLASS,
            scroll_behavior: ScrollBehavior::Smooth,
            photo_fallback: photo_fallback.into(),
        }
    }

    /// JSON payload for the `<script type="application/json">` block.
    ///
    /// `</` is escaped so the payload cannot close its script element.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .expect("runtime config is plain data")
            .replace("</", "<\\/")
    }
}
