//! Compiled-in portfolio content.
//!
//! Everything the page shows about the person lives here as `'static` data:
//! the profile, certifications, skills, and the education timeline. There is
//! no loading step and nothing is mutated after startup, so the only runtime
//! behavior in this module is lookup: [`icon_for`] resolves a certification's
//! icon tag to a glyph, and [`Profile::placeholder_avatar`] builds the
//! initials image shown when the profile photo fails to load.

use crate::icons::Icon;
use std::collections::HashSet;
use std::fmt;

/// Issuer family of a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertCategory {
    Microsoft,
    Adobe,
    AutoCAD,
    Technical,
}

impl CertCategory {
    pub fn label(self) -> &'static str {
        match self {
            CertCategory::Microsoft => "Microsoft",
            CertCategory::Adobe => "Adobe",
            CertCategory::AutoCAD => "AutoCAD",
            CertCategory::Technical => "Technical",
        }
    }
}

impl fmt::Display for CertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    CreativeBusiness,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 2] = [SkillCategory::Technical, SkillCategory::CreativeBusiness];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::CreativeBusiness => "Creative/Business",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Certification {
    /// Unique within the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    /// Icon tag, resolved with [`icon_for`].
    pub icon: &'static str,
    pub category: CertCategory,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

#[derive(Debug, Clone)]
pub struct EducationEvent {
    /// Free-text date label, e.g. "May 2026".
    pub year: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub details: &'static str,
}

/// Who the page is about.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Given names, rendered plain in the hero heading.
    pub given_names: &'static str,
    /// Family name, rendered in the accent color.
    pub family_name: &'static str,
    /// Brand mark in the nav bar, split around the accented dot: `RMB` `.` `IA`.
    pub brand: (&'static str, &'static str),
    pub badge: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about: &'static str,
    pub photo_url: &'static str,
    pub linkedin_url: &'static str,
    pub resume_path: &'static str,
    pub gpa: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.family_name)
    }

    /// First letter of the first given name and of the family name.
    pub fn initials(&self) -> String {
        let first = self.given_names.chars().find(|c| c.is_alphabetic());
        let last = self.family_name.chars().find(|c| c.is_alphabetic());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Initials avatar as a self-contained `data:` URI.
    ///
    /// Used as the profile photo's fallback source; it needs no network, so
    /// the fallback itself cannot fail.
    pub fn placeholder_avatar(&self) -> String {
        let svg = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512" viewBox="0 0 512 512"><rect width="512" height="512" fill="#2E5BFF"/><text x="50%" y="50%" dy=".35em" text-anchor="middle" font-family="system-ui, sans-serif" font-size="200" font-weight="700" fill="#ffffff">{}</text></svg>"##,
            self.initials()
        );
        format!("data:image/svg+xml,{}", percent_encode_svg(&svg))
    }
}

/// Percent-encode the characters that break an SVG `data:` URI.
fn percent_encode_svg(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() + svg.len() / 4);
    for c in svg.chars() {
        match c {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '"' => out.push_str("%22"),
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}

/// Read-only view over all page content.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: &'static Profile,
    pub certifications: &'static [Certification],
    pub skills: &'static [Skill],
    pub education: &'static [EducationEvent],
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn standard() -> Catalog {
        Catalog {
            profile: &PROFILE,
            certifications: CERTIFICATIONS,
            skills: SKILLS,
            education: EDUCATION,
        }
    }

    /// Certification ids that occur more than once, in first-repeat order.
    pub fn duplicate_certification_ids(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for cert in self.certifications {
            if !seen.insert(cert.id) && !dupes.contains(&cert.id) {
                dupes.push(cert.id);
            }
        }
        dupes
    }

    /// Certifications whose icon tag falls back to the default glyph.
    pub fn unresolved_icon_tags(&self) -> Vec<&'static Certification> {
        self.certifications
            .iter()
            .filter(|c| lookup_icon(c.icon).is_none())
            .collect()
    }
}

/// Glyph used when an icon tag is not recognized.
pub const FALLBACK_ICON: Icon = Icon::Award;

fn lookup_icon(tag: &str) -> Option<Icon> {
    let icon = match tag {
        "spreadsheet" => Icon::FileSpreadsheet,
        "text" => Icon::FileText,
        "presentation" => Icon::Presentation,
        "mail" => Icon::Mail,
        "monitor" => Icon::Monitor,
        "layout" => Icon::Layout,
        "image" => Icon::Image,
        "pen" => Icon::PenTool,
        "video" => Icon::Video,
        _ => return None,
    };
    Some(icon)
}

/// Resolve a certification icon tag, falling back to [`FALLBACK_ICON`].
pub fn icon_for(tag: &str) -> Icon {
    lookup_icon(tag).unwrap_or_else(|| {
        log::debug!("unknown icon tag {tag:?}, using fallback glyph");
        FALLBACK_ICON
    })
}

// =============================================================================
// Content
// =============================================================================

pub static PROFILE: Profile = Profile {
    given_names: "Ryan Michael",
    family_name: "Bauer",
    brand: ("RMB", "IA"),
    badge: "Future Cybersecurity Leader",
    headline: "Architecting Secure Business Systems. Bridging high-level MIS strategy with tactical Information Assurance.",
    summary: "Analytical Management Information Systems student at FAU. Driven by data organization, systems management, and secure information handling.",
    about: "I work where business systems meet security: organizing data, managing the systems that hold it, and keeping the information inside them safe. My coursework pairs MIS strategy with a cybersecurity concentration, backed by industry certifications across productivity, design, and operating-system fundamentals.",
    photo_url: "https://media.licdn.com/dms/image/v2/D4E03AQE-K8H8O_F8WQ/profile-displayphoto-shrink_800_800/profile-displayphoto-shrink_800_800/0/1690466453916?e=1746057600&v=beta&t=M8-9x6oU-QnB0Y34GzD5M_yN1H7F6p-p1l2hXyP5p1A",
    linkedin_url: "https://www.linkedin.com/in/ryanbauer654",
    resume_path: "/Resume.pdf",
    gpa: "3.622",
};

pub static CERTIFICATIONS: &[Certification] = &[
    Certification { id: "1", name: "MOS: Excel", issuer: "Certiport", year: 2020, icon: "spreadsheet", category: CertCategory::Microsoft },
    Certification { id: "2", name: "MOS: Word", issuer: "Certiport", year: 2020, icon: "text", category: CertCategory::Microsoft },
    Certification { id: "3", name: "MOS: PowerPoint", issuer: "Certiport", year: 2020, icon: "presentation", category: CertCategory::Microsoft },
    Certification { id: "4", name: "MOS: Outlook", issuer: "Certiport", year: 2021, icon: "mail", category: CertCategory::Microsoft },
    Certification { id: "5", name: "Windows OS Fundamentals", issuer: "Certiport", year: 2021, icon: "monitor", category: CertCategory::Technical },
    Certification { id: "6", name: "Autodesk Certified User: AutoCAD", issuer: "Certiport", year: 2021, icon: "layout", category: CertCategory::AutoCAD },
    Certification { id: "7", name: "Visual Design (Photoshop)", issuer: "Certiport", year: 2021, icon: "image", category: CertCategory::Adobe },
    Certification { id: "8", name: "Graphic Design (Illustrator)", issuer: "Certiport", year: 2022, icon: "pen", category: CertCategory::Adobe },
    Certification { id: "9", name: "Digital Video (Premiere Pro)", issuer: "Certiport", year: 2022, icon: "video", category: CertCategory::Adobe },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "Cybersecurity Fundamentals", category: SkillCategory::Technical },
    Skill { name: "Network Security", category: SkillCategory::Technical },
    Skill { name: "Database Management Systems", category: SkillCategory::Technical },
    Skill { name: "Computer Forensics", category: SkillCategory::Technical },
    Skill { name: "Information Assurance", category: SkillCategory::Technical },
    Skill { name: "Adobe Creative Suite", category: SkillCategory::CreativeBusiness },
    Skill { name: "Analytical Thinking", category: SkillCategory::CreativeBusiness },
    Skill { name: "Problem-solving", category: SkillCategory::CreativeBusiness },
    Skill { name: "Team Collaboration", category: SkillCategory::CreativeBusiness },
    Skill { name: "Project Management", category: SkillCategory::CreativeBusiness },
];

pub static EDUCATION: &[EducationEvent] = &[
    EducationEvent {
        year: "May 2026",
        degree: "B.B.A. Management Information Systems",
        institution: "Florida Atlantic University",
        details: "Concentration in Cybersecurity. Cumulative GPA: 3.622/4.0",
    },
    EducationEvent {
        year: "May 2027",
        degree: "M.S. Information Technology and Management",
        institution: "Florida Atlantic University",
        details: "Advanced focus on strategic systems and information assurance.",
    },
];
