//! Page rendering.
//!
//! [`render`] turns the current [`Theme`], the [`Catalog`], and the site config
//! into the complete HTML document. It is a pure function: the same inputs
//! always produce byte-identical output, and the page is rendered whole on
//! every call (the catalog is small and fixed, so there is nothing to page or
//! virtualize).
//!
//! ## Document Structure
//!
//! ```text
//! html.dark
//! └── body
//!     └── div.page
//!         ├── nav.nav            brand, section links, resume, theme toggle
//!         ├── section#hero       badge, name, headline, calls to action, photo
//!         ├── section#about      summary + stats strip
//!         ├── section#experience education timeline (alternating sides)
//!         ├── section#credentials certification grid
//!         ├── section#skills     Technical / Creative/Business groups
//!         └── footer#contact     contact links
//! ```
//!
//! Stylesheet and runtime script are inlined, so `index.html` is the whole
//! site apart from copied assets.

use crate::catalog::{Catalog, Certification, EducationEvent, Skill, SkillCategory, icon_for};
use crate::config::{self, LinksConfig, SiteConfig};
use crate::icons::Icon;
use crate::interact::{REVEAL_CLASS, RuntimeConfig};
use crate::theme::{Surface, Theme};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const RUNTIME_JS: &str = include_str!("../static/runtime.js");

/// Id of the JSON block the runtime reads its configuration from.
pub const RUNTIME_CONFIG_ID: &str = "portfolio-runtime";

/// Id of the profile `<img>` the runtime attaches the fallback handler to.
pub const PROFILE_PHOTO_ID: &str = "profile-photo";

/// Landmark sections, each addressable by a stable fragment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Credentials,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Credentials,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Credentials => "credentials",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Section links in the nav bar, in display order.
pub const NAV_LINKS: [(&str, SectionId); 4] = [
    ("About", SectionId::About),
    ("Experience", SectionId::Experience),
    ("Credentials", SectionId::Credentials),
    ("Skills", SectionId::Skills),
];

// ============================================================================
// View helpers
// ============================================================================

/// Skills split by category. Every skill lands in exactly one group.
#[derive(Debug, Default)]
pub struct SkillGroups<'a> {
    pub technical: Vec<&'a Skill>,
    pub creative_business: Vec<&'a Skill>,
}

impl<'a> SkillGroups<'a> {
    pub fn get(&self, category: SkillCategory) -> &[&'a Skill] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::CreativeBusiness => &self.creative_business,
        }
    }
}

/// Partition skills by category, preserving catalog order within each group.
pub fn partition_skills(skills: &[Skill]) -> SkillGroups<'_> {
    let mut groups = SkillGroups::default();
    for skill in skills {
        match skill.category {
            SkillCategory::Technical => groups.technical.push(skill),
            SkillCategory::CreativeBusiness => groups.creative_business.push(skill),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn class(self) -> &'static str {
        match self {
            Side::Left => "timeline-item--left",
            Side::Right => "timeline-item--right",
        }
    }
}

/// Timeline placement: even positions on the left, odd on the right.
pub fn timeline_side(index: usize) -> Side {
    if index % 2 == 0 { Side::Left } else { Side::Right }
}

/// One figure in the about-section stats strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

/// Stats derived from the catalog.
pub fn stats(catalog: &Catalog) -> Vec<Stat> {
    vec![
        Stat {
            value: catalog.certifications.len().to_string(),
            label: "Industry Certifications",
        },
        Stat {
            value: catalog.profile.gpa.to_string(),
            label: "Cumulative GPA",
        },
        Stat {
            value: catalog.education.len().to_string(),
            label: "Degree Programs",
        },
        Stat {
            value: catalog.skills.len().to_string(),
            label: "Core Skills",
        },
    ]
}

/// Inline stylesheet: palette variables followed by the static rules.
pub fn stylesheet(site: &SiteConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(&site.colors), CSS_STATIC)
}

// ============================================================================
// Document
// ============================================================================

/// Render the full document for `theme`.
pub fn render(theme: Theme, catalog: &Catalog, site: &SiteConfig) -> Markup {
    let runtime = RuntimeConfig::new(theme, catalog.profile.placeholder_avatar());
    html! {
        (DOCTYPE)
        html lang=(site.site.lang) class=(theme.root_class()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site.site.title) }
                @if !site.site.description.is_empty() {
                    meta name="description" content=(site.site.description);
                }
                style { (PreEscaped(stylesheet(site))) }
            }
            body {
                (page_body(theme, catalog, &site.links))
                script id=(RUNTIME_CONFIG_ID) type="application/json" {
                    (PreEscaped(runtime.to_json()))
                }
                script { (PreEscaped(RUNTIME_JS)) }
            }
        }
    }
}

/// Everything inside `<body>` except the runtime scripts.
pub(crate) fn page_body(theme: Theme, catalog: &Catalog, links: &LinksConfig) -> Markup {
    html! {
        div class=(Surface::Page.class(theme)) data-surface=(Surface::Page.base()) {
            (render_nav(theme, catalog))
            main {
                (render_hero(theme, catalog))
                (render_about(theme, catalog))
                (render_experience(theme, catalog.education))
                (render_credentials(theme, catalog.certifications))
                (render_skills(theme, catalog.skills))
            }
            (render_contact(theme, catalog, links))
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Theme toggle button. Both glyphs are rendered; the stylesheet shows the
/// one matching the root class (sun while dark, moon while light).
fn theme_button(theme: Theme, extra: &str) -> Markup {
    html! {
        button type="button" class=(Surface::ThemeButton.class_with(theme, extra))
            data-surface=(Surface::ThemeButton.base())
            data-action="toggle-theme" aria-label="Toggle Theme" {
            span.theme-icon data-when="dark" { (Icon::Sun.svg(20)) }
            span.theme-icon data-when="light" { (Icon::Moon.svg(20)) }
        }
    }
}

fn render_nav(theme: Theme, catalog: &Catalog) -> Markup {
    let profile = catalog.profile;
    html! {
        nav class=(Surface::Nav.class(theme)) data-surface=(Surface::Nav.base()) {
            div.nav-inner {
                a.brand-mark href=(SectionId::Hero.href()) data-scroll=(SectionId::Hero.id()) {
                    span class=(Surface::Brand.class(theme)) data-surface=(Surface::Brand.base()) {
                        (Icon::ShieldCheck.svg(32))
                    }
                    span.brand-text.mono {
                        (profile.brand.0)
                        span.brand-dot { "." }
                        (profile.brand.1)
                    }
                }
                div.nav-links {
                    @for (label, section) in NAV_LINKS {
                        a.nav-link href=(section.href()) data-scroll=(section.id()) { (label) }
                    }
                    a.nav-link.nav-resume href=(profile.resume_path) target="_blank" rel="noopener noreferrer" {
                        (Icon::FileText.svg(18))
                        span { "Resume" }
                    }
                    (theme_button(theme, "theme-button--desktop"))
                }
                div.nav-mobile {
                    (theme_button(theme, "theme-button--mobile"))
                }
            }
        }
    }
}

fn render_hero(theme: Theme, catalog: &Catalog) -> Markup {
    let profile = catalog.profile;
    let alt = format!("{} - Professional Portrait", profile.full_name());
    html! {
        section.hero id=(SectionId::Hero.id()) {
            div class=(Surface::HeroGlow.class(theme)) data-surface=(Surface::HeroGlow.base()) {}
            div class={ "hero-inner " (REVEAL_CLASS) } {
                div.hero-text {
                    div class=(Surface::Badge.class(theme)) data-surface=(Surface::Badge.base()) {
                        (profile.badge)
                    }
                    h1.hero-name {
                        (profile.given_names) " "
                        span class=(Surface::Accent.class(theme)) data-surface=(Surface::Accent.base()) {
                            (profile.family_name)
                        }
                    }
                    p.hero-headline { (profile.headline) }
                    p class=(Surface::Lead.class(theme)) data-surface=(Surface::Lead.base()) {
                        (profile.summary)
                    }
                    div.hero-actions {
                        a class=(Surface::CtaPrimary.class(theme)) data-surface=(Surface::CtaPrimary.base())
                            href=(SectionId::Contact.href()) data-scroll=(SectionId::Contact.id()) {
                            "Connect With Me"
                        }
                        a class=(Surface::CtaSecondary.class(theme)) data-surface=(Surface::CtaSecondary.base())
                            href=(profile.resume_path) target="_blank" rel="noopener noreferrer" {
                            (Icon::FileText.svg(20))
                            "View Resume"
                        }
                        a class=(Surface::IconLink.class(theme)) data-surface=(Surface::IconLink.base())
                            href=(profile.linkedin_url) target="_blank" rel="noopener noreferrer"
                            title="LinkedIn Profile" aria-label="LinkedIn Profile" {
                            (Icon::Linkedin.svg(20))
                        }
                    }
                }
                div.photo-frame {
                    div class=(Surface::PhotoHalo.class(theme)) data-surface=(Surface::PhotoHalo.base()) {}
                    img.profile-photo id=(PROFILE_PHOTO_ID) src=(profile.photo_url) alt=(alt);
                }
            }
        }
    }
}

fn section_heading(theme: Theme, title: &str, subtitle: &str) -> Markup {
    html! {
        header class=(Surface::SectionHeading.class(theme)) data-surface=(Surface::SectionHeading.base()) {
            h2 { (title) }
            p.section-subtitle { (subtitle) }
        }
    }
}

fn render_about(theme: Theme, catalog: &Catalog) -> Markup {
    html! {
        section.section id=(SectionId::About.id()) {
            (section_heading(theme, "About", "Security-minded systems thinking"))
            p class={ "about-text " (REVEAL_CLASS) } { (catalog.profile.about) }
            div.stats {
                @for stat in stats(catalog) {
                    div class=(Surface::StatCard.class_with(theme, REVEAL_CLASS)) data-surface=(Surface::StatCard.base()) {
                        span.stat-value { (stat.value) }
                        span.stat-label { (stat.label) }
                    }
                }
            }
        }
    }
}

fn render_experience(theme: Theme, education: &[EducationEvent]) -> Markup {
    html! {
        section.section id=(SectionId::Experience.id()) {
            (section_heading(theme, "Experience", "Academic journey and milestones"))
            ol.timeline {
                @for (index, event) in education.iter().enumerate() {
                    li class={ "timeline-item " (timeline_side(index).class()) " " (REVEAL_CLASS) } {
                        span class=(Surface::TimelineDot.class(theme)) data-surface=(Surface::TimelineDot.base()) {}
                        div class=(Surface::TimelineCard.class(theme)) data-surface=(Surface::TimelineCard.base()) {
                            span.timeline-year.mono { (event.year) }
                            h3.timeline-degree { (event.degree) }
                            p.timeline-institution { (event.institution) }
                            p.timeline-details { (event.details) }
                        }
                    }
                }
            }
        }
    }
}

fn render_certification(theme: Theme, cert: &Certification) -> Markup {
    html! {
        article class=(Surface::CertCard.class_with(theme, REVEAL_CLASS)) data-surface=(Surface::CertCard.base())
            data-cert-id=(cert.id) {
            div class=(Surface::CertIcon.class(theme)) data-surface=(Surface::CertIcon.base()) {
                (icon_for(cert.icon).svg(24))
            }
            div.cert-body {
                h3.cert-name { (cert.name) }
                p.cert-meta { (cert.issuer) " · " (cert.year) }
                span.cert-category { (cert.category) }
            }
        }
    }
}

fn render_credentials(theme: Theme, certifications: &[Certification]) -> Markup {
    html! {
        section.section id=(SectionId::Credentials.id()) {
            (section_heading(theme, "Credentials", "Industry-recognized certifications"))
            div.cert-grid {
                @for cert in certifications {
                    (render_certification(theme, cert))
                }
            }
        }
    }
}

fn render_skills(theme: Theme, skills: &[Skill]) -> Markup {
    let groups = partition_skills(skills);
    html! {
        section.section id=(SectionId::Skills.id()) {
            (section_heading(theme, "Skills", "Technical depth with creative and business range"))
            div.skill-groups {
                @for category in SkillCategory::ALL {
                    div class=(Surface::SkillGroup.class_with(theme, REVEAL_CLASS)) data-surface=(Surface::SkillGroup.base())
                        data-category=(category.label()) {
                        h3.skill-group-title {
                            @match category {
                                SkillCategory::Technical => { (Icon::Terminal.svg(22)) }
                                SkillCategory::CreativeBusiness => { (Icon::Users.svg(22)) }
                            }
                            (category.label())
                        }
                        ul.skill-list {
                            @for skill in groups.get(category) {
                                li class=(Surface::SkillChip.class(theme)) data-surface=(Surface::SkillChip.base()) {
                                    (Icon::ChevronRight.svg(16))
                                    (skill.name)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_contact(theme: Theme, catalog: &Catalog, links: &LinksConfig) -> Markup {
    let profile = catalog.profile;
    html! {
        footer id=(SectionId::Contact.id()) class=(Surface::Footer.class(theme)) data-surface=(Surface::Footer.base()) {
            div class={ "contact-inner " (REVEAL_CLASS) } {
                h2 { "Let's Connect" }
                p.contact-text {
                    "Open to internships, collaborations, and conversations about secure business systems."
                }
                div.contact-links {
                    @if let Some(mailto) = links.mailto() {
                        a.contact-link href=(mailto) {
                            (Icon::Mail.svg(20))
                            span { "Email" }
                        }
                    }
                    a.contact-link href=(profile.linkedin_url) target="_blank" rel="noopener noreferrer" {
                        (Icon::Linkedin.svg(20))
                        span { "LinkedIn" }
                    }
                    @if let Some(github) = links.github() {
                        a.contact-link href=(github) target="_blank" rel="noopener noreferrer" {
                            (Icon::Github.svg(20))
                            span { "GitHub" }
                        }
                    }
                    a.contact-link href=(profile.resume_path) target="_blank" rel="noopener noreferrer" {
                        (Icon::FileText.svg(20))
                        span { "Resume" }
                    }
                }
                p.copyright { "© " (profile.full_name()) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CERTIFICATIONS, CertCategory};
    use crate::test_helpers::*;

    fn body(theme: Theme) -> String {
        page_body(theme, &Catalog::standard(), &LinksConfig::default()).into_string()
    }

    #[test]
    fn render_is_deterministic() {
        let catalog = Catalog::standard();
        let site = SiteConfig::default();
        for theme in Theme::ALL {
            assert_eq!(
                render(theme, &catalog, &site).into_string(),
                render(theme, &catalog, &site).into_string()
            );
        }
    }

    #[test]
    fn document_root_carries_theme_class() {
        let catalog = Catalog::standard();
        let site = SiteConfig::default();
        let dark = render(Theme::Dark, &catalog, &site).into_string();
        let light = render(Theme::Light, &catalog, &site).into_string();
        assert!(dark.starts_with("<!DOCTYPE html>"));
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
        assert!(light.contains(r#"<html lang="en" class="light">"#));
    }

    #[test]
    fn document_inlines_palette_and_runtime() {
        let html = render(Theme::Dark, &Catalog::standard(), &SiteConfig::default()).into_string();
        assert!(html.contains("--dark-bg: #0B0E14;"));
        assert!(html.contains(r#"<script id="portfolio-runtime" type="application/json">"#));
        assert!(html.contains(r#""headerOffset":80"#));
        assert!(html.contains("<title>Ryan Michael Bauer | Portfolio</title>"));
    }

    #[test]
    fn every_surface_follows_the_theme() {
        for theme in Theme::ALL {
            let html = body(theme);
            let other = theme.toggled();
            for surface in Surface::ALL {
                assert!(
                    html.contains(&format!(r#"data-surface="{}""#, surface.base())),
                    "surface {} not rendered",
                    surface.base()
                );
            }
            for class in class_attrs(&html) {
                assert!(
                    !class.split(' ').any(|c| c.ends_with(&format!("--{other}"))),
                    "{theme} render has {other} variant: {class}"
                );
            }
        }
    }

    #[test]
    fn themed_elements_carry_current_variant() {
        let html = body(Theme::Light);
        for class in class_attrs(&html) {
            let base = class.split(' ').next().unwrap_or_default();
            if Surface::ALL.iter().any(|s| s.base() == base) {
                assert!(
                    class.contains(&format!("{base}--light")),
                    "missing light variant: {class}"
                );
            }
        }
    }

    #[test]
    fn all_sections_have_stable_ids() {
        let html = body(Theme::Dark);
        for section in SectionId::ALL {
            assert_eq!(
                count(&html, &format!(r#"id="{}""#, section.id())),
                1,
                "section {}",
                section.id()
            );
        }
    }

    #[test]
    fn landmarks_carry_section_ids() {
        let html = body(Theme::Dark);
        assert!(html.contains(r#"<section class="hero" id="hero">"#));
        for section in [SectionId::About, SectionId::Experience, SectionId::Credentials, SectionId::Skills] {
            assert!(
                html.contains(&format!(r#"<section class="section" id="{}">"#, section.id())),
                "section {}",
                section.id()
            );
        }
        assert!(html.contains(r#"<footer id="contact" class="footer footer--dark""#));
        assert!(html.contains(&format!(r#"<img class="profile-photo" id="{PROFILE_PHOTO_ID}""#)));
    }

    #[test]
    fn nav_links_target_sections() {
        let html = body(Theme::Dark);
        for (label, section) in NAV_LINKS {
            assert!(html.contains(&format!(
                r#"href="{}" data-scroll="{}">{label}</a>"#,
                section.href(),
                section.id()
            )));
        }
    }

    #[test]
    fn theme_toggle_is_labelled_and_present_twice() {
        let html = body(Theme::Dark);
        assert_eq!(count(&html, r#"data-action="toggle-theme""#), 2);
        assert_eq!(count(&html, r#"aria-label="Toggle Theme""#), 2);
    }

    #[test]
    fn resume_links_open_new_context() {
        let html = body(Theme::Dark);
        let resume = r#"href="/Resume.pdf" target="_blank" rel="noopener noreferrer""#;
        assert_eq!(count(&html, resume), 3);
    }

    #[test]
    fn education_renders_in_order_alternating_sides() {
        let html = body(Theme::Dark);
        let experience = section_html(&html, "experience");
        let sides = ordered_matches(experience, &["timeline-item--left", "timeline-item--right"]);
        assert_eq!(sides, vec!["timeline-item--left", "timeline-item--right"]);

        let bba = experience.find("B.B.A. Management").unwrap();
        let ms = experience.find("M.S. Information Technology").unwrap();
        assert!(bba < ms);
    }

    #[test]
    fn timeline_side_alternates_from_left() {
        let sides: Vec<_> = (0..5).map(timeline_side).collect();
        assert_eq!(
            sides,
            vec![Side::Left, Side::Right, Side::Left, Side::Right, Side::Left]
        );
    }

    #[test]
    fn skill_partition_is_exhaustive_and_disjoint() {
        let catalog = Catalog::standard();
        let groups = partition_skills(catalog.skills);
        assert_eq!(
            groups.technical.len() + groups.creative_business.len(),
            catalog.skills.len()
        );
        for skill in catalog.skills {
            let in_tech = groups.technical.iter().any(|s| std::ptr::eq(*s, skill));
            let in_creative = groups
                .creative_business
                .iter()
                .any(|s| std::ptr::eq(*s, skill));
            assert!(in_tech ^ in_creative, "{}", skill.name);
        }
        assert!(groups.get(SkillCategory::Technical).iter().all(|s| s.category == SkillCategory::Technical));
    }

    #[test]
    fn skills_section_lists_each_skill_once() {
        let html = body(Theme::Dark);
        let skills = section_html(&html, "skills");
        for skill in Catalog::standard().skills {
            assert_eq!(count(skills, skill.name), 1, "{}", skill.name);
        }
        let groups = ordered_matches(
            skills,
            &[r#"data-category="Technical""#, r#"data-category="Creative/Business""#],
        );
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn credentials_render_every_certification() {
        let html = body(Theme::Dark);
        let credentials = section_html(&html, "credentials");
        for cert in CERTIFICATIONS {
            assert!(credentials.contains(&format!(r#"data-cert-id="{}""#, cert.id)));
            assert!(credentials.contains(cert.name));
        }
        assert!(credentials.contains("Certiport · 2020"));
    }

    #[test]
    fn unknown_icon_renders_award_glyph() {
        let cert = Certification {
            id: "x",
            name: "Mystery Cert",
            issuer: "Nobody",
            year: 2024,
            icon: "hologram",
            category: CertCategory::Technical,
        };
        let card = render_certification(Theme::Dark, &cert).into_string();
        let award = Icon::Award.svg(24).into_string();
        assert!(card.contains(&award));
    }

    #[test]
    fn stats_derive_from_catalog() {
        let values: Vec<_> = stats(&Catalog::standard())
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["9", "3.622", "2", "10"]);
    }

    #[test]
    fn contact_links_follow_config() {
        let catalog = Catalog::standard();
        let bare = page_body(Theme::Dark, &catalog, &LinksConfig::default()).into_string();
        let contact = section_html(&bare, "contact");
        assert!(!contact.contains("mailto:"));
        assert!(contact.contains("linkedin.com/in/ryanbauer654"));

        let links = LinksConfig {
            email: "rb@example.com".into(),
            github: "https://github.com/example".into(),
        };
        let full = page_body(Theme::Dark, &catalog, &links).into_string();
        let contact = section_html(&full, "contact");
        assert!(contact.contains(r#"href="mailto:rb@example.com""#));
        assert!(contact.contains(r#"href="https://github.com/example""#));
    }

    #[test]
    fn profile_photo_has_portrait_alt() {
        let html = body(Theme::Dark);
        assert!(html.contains(r#"id="profile-photo""#));
        assert!(html.contains(r#"alt="Ryan Michael Bauer - Professional Portrait""#));
    }

    #[test]
    fn reveal_targets_are_marked() {
        let html = body(Theme::Dark);
        let revealable = class_attrs(&html)
            .into_iter()
            .filter(|c| c.split(' ').any(|part| part == REVEAL_CLASS))
            .count();
        // hero + about text + 4 stats + 2 timeline + 9 certs + 2 skill groups + contact
        assert_eq!(revealable, 20);
    }
}
