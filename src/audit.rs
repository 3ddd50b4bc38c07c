//! Catalog consistency checks for the `check` command.
//!
//! The page renders whatever the catalog holds, so nothing here is fatal to
//! rendering. Findings are split by severity: errors break a page invariant
//! (duplicate certification ids collide in `data-cert-id` and in the reveal
//! bookkeeping), warnings flag content that renders with a fallback.

use crate::catalog::{Catalog, FALLBACK_ICON, SkillCategory};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    DuplicateCertificationId { id: &'static str },
    UnknownIconTag { cert_id: &'static str, tag: &'static str },
    EmptySkillGroup { category: SkillCategory },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::DuplicateCertificationId { .. } => Severity::Error,
            Finding::UnknownIconTag { .. } | Finding::EmptySkillGroup { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateCertificationId { id } => {
                write!(f, "certification id '{id}' is used more than once")
            }
            Finding::UnknownIconTag { cert_id, tag } => write!(
                f,
                "certification '{cert_id}' has unknown icon tag '{tag}', rendering {FALLBACK_ICON:?}"
            ),
            Finding::EmptySkillGroup { category } => {
                write!(f, "skill group '{category}' has no skills")
            }
        }
    }
}

/// Run every check over `catalog`, errors first.
pub fn audit(catalog: &Catalog) -> Vec<Finding> {
    let mut findings: Vec<Finding> = catalog
        .duplicate_certification_ids()
        .into_iter()
        .map(|id| Finding::DuplicateCertificationId { id })
        .collect();

    findings.extend(
        catalog
            .unresolved_icon_tags()
            .into_iter()
            .map(|cert| Finding::UnknownIconTag {
                cert_id: cert.id,
                tag: cert.icon,
            }),
    );

    findings.extend(
        SkillCategory::ALL
            .into_iter()
            .filter(|category| !catalog.skills.iter().any(|s| s.category == *category))
            .map(|category| Finding::EmptySkillGroup { category }),
    );

    findings.sort_by_key(Finding::severity);
    findings
}

/// True when any finding should fail the check.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity() == Severity::Error)
}
