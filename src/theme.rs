//! Light/dark theme state and themed surface classes.
//!
//! The page has exactly two visual variants. Every element whose look depends
//! on the theme is a [`Surface`]; it carries a base class plus one modifier
//! class per theme (`nav nav--dark` / `nav nav--light`). Both variants are
//! written out in `static/style.css` against palette variables, so switching
//! theme is a class swap, never a color computation.
//!
//! ```text
//! <html class="dark">
//!   <nav class="nav nav--dark" data-surface="nav">…
//! ```
//!
//! The `data-surface` attribute lets the in-page runtime find every themed
//! element and swap its modifier when the theme toggles.

use serde::Serialize;
use std::fmt;

/// Visual theme of the page. Every fresh load starts at [`Theme::Dark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// The other theme. Unconditional; `t.toggled().toggled() == t`.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class placed on the document root (`<html class="dark">`).
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_class())
    }
}

/// Every themed element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Page,
    Nav,
    Brand,
    ThemeButton,
    Badge,
    Accent,
    Lead,
    HeroGlow,
    PhotoHalo,
    CtaPrimary,
    CtaSecondary,
    IconLink,
    SectionHeading,
    StatCard,
    TimelineCard,
    TimelineDot,
    CertCard,
    CertIcon,
    SkillGroup,
    SkillChip,
    Footer,
}

impl Surface {
    pub const ALL: [Surface; 21] = [
        Surface::Page,
        Surface::Nav,
        Surface::Brand,
        Surface::ThemeButton,
        Surface::Badge,
        Surface::Accent,
        Surface::Lead,
        Surface::HeroGlow,
        Surface::PhotoHalo,
        Surface::CtaPrimary,
        Surface::CtaSecondary,
        Surface::IconLink,
        Surface::SectionHeading,
        Surface::StatCard,
        Surface::TimelineCard,
        Surface::TimelineDot,
        Surface::CertCard,
        Surface::CertIcon,
        Surface::SkillGroup,
        Surface::SkillChip,
        Surface::Footer,
    ];

    /// Base class, also the value of the `data-surface` attribute.
    pub fn base(self) -> &'static str {
        match self {
            Surface::Page => "page",
            Surface::Nav => "nav",
            Surface::Brand => "brand",
            Surface::ThemeButton => "theme-button",
            Surface::Badge => "badge",
            Surface::Accent => "accent",
            Surface::Lead => "lead",
            Surface::HeroGlow => "hero-glow",
            Surface::PhotoHalo => "photo-halo",
            Surface::CtaPrimary => "cta-primary",
            Surface::CtaSecondary => "cta-secondary",
            Surface::IconLink => "icon-link",
            Surface::SectionHeading => "section-heading",
            Surface::StatCard => "stat-card",
            Surface::TimelineCard => "timeline-card",
            Surface::TimelineDot => "timeline-dot",
            Surface::CertCard => "cert-card",
            Surface::CertIcon => "cert-icon",
            Surface::SkillGroup => "skill-group",
            Surface::SkillChip => "skill-chip",
            Surface::Footer => "footer",
        }
    }

    /// Modifier class for one theme, e.g. `nav--light`.
    pub fn variant(self, theme: Theme) -> String {
        format!("{}--{}", self.base(), theme.root_class())
    }

    /// Full class attribute value for this surface under `theme`.
    pub fn class(self, theme: Theme) -> String {
        format!("{} {}", self.base(), self.variant(theme))
    }

    /// Like [`Surface::class`] with extra layout classes appended.
    pub fn class_with(self, theme: Theme, extra: &str) -> String {
        format!("{} {}", self.class(theme), extra)
    }
}
