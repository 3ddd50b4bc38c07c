//! CLI output formatting for `build` and `check`.
//!
//! Output is a content inventory first: what the page shows (sections,
//! counts), then what was written or found. File paths appear as indented
//! context lines under the thing they belong to.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Page → index.html (48213 bytes)
//!     Sections: hero, about, experience, credentials, skills, contact
//! Assets
//!     Resume.pdf
//!
//! Generated 1 page, 1 asset
//! ```
//!
//! ## Check
//!
//! ```text
//! Catalog
//!     9 certifications
//!     10 skills (5 Technical, 5 Creative/Business)
//!     2 education entries
//! Findings
//!     warning: certification 'x' has unknown icon tag 'y', rendering Award
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::audit::Finding;
use crate::catalog::Catalog;
use crate::generate::BuildReport;
use crate::render::{SectionId, partition_skills};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 asset`, `2 assets`.
fn plural(n: usize, word: &str) -> String {
    plural_with(n, word, &format!("{word}s"))
}

fn plural_with(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Build output
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Page → {} ({} bytes)",
        report.page.display(),
        report.page_bytes
    ));
    let sections: Vec<&str> = SectionId::ALL.iter().map(|s| s.id()).collect();
    lines.push(format!("{}Sections: {}", indent(1), sections.join(", ")));

    lines.push("Assets".to_string());
    if let Some(missing) = &report.missing_assets_dir {
        lines.push(format!("{}(none, {} not found)", indent(1), missing.display()));
    } else if report.assets.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for asset in &report.assets {
        lines.push(format!("{}{}", indent(1), asset.display()));
    }
    for asset in &report.shadowed_assets {
        lines.push(format!(
            "{}{} (skipped, would replace {})",
            indent(1),
            asset.display(),
            report.page.display()
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}",
        plural(report.assets.len(), "asset")
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

pub fn format_check_output(catalog: &Catalog, findings: &[Finding]) -> Vec<String> {
    let mut lines = Vec::new();

    let groups = partition_skills(catalog.skills);
    lines.push("Catalog".to_string());
    lines.push(format!(
        "{}{}",
        indent(1),
        plural(catalog.certifications.len(), "certification")
    ));
    lines.push(format!(
        "{}{} ({} Technical, {} Creative/Business)",
        indent(1),
        plural(catalog.skills.len(), "skill"),
        groups.technical.len(),
        groups.creative_business.len()
    ));
    lines.push(format!(
        "{}{}",
        indent(1),
        plural_with(catalog.education.len(), "education entry", "education entries")
    ));

    lines.push("Findings".to_string());
    if findings.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for finding in findings {
        lines.push(format!("{}{}: {}", indent(1), finding.severity(), finding));
    }
    lines
}

pub fn print_check_output(catalog: &Catalog, findings: &[Finding]) {
    for line in format_check_output(catalog, findings) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn build_output_lists_page_and_assets() {
        let report = BuildReport {
            page: PathBuf::from("index.html"),
            page_bytes: 1234,
            assets: vec![PathBuf::from("Resume.pdf"), PathBuf::from("img/og.png")],
            missing_assets_dir: None,
            shadowed_assets: vec![],
        };
        assert_eq!(
            format_build_output(&report),
            vec![
                "Page → index.html (1234 bytes)",
                "    Sections: hero, about, experience, credentials, skills, contact",
                "Assets",
                "    Resume.pdf",
                "    img/og.png",
                "",
                "Generated 1 page, 2 assets",
            ]
        );
    }

    #[test]
    fn build_output_notes_missing_assets_dir() {
        let report = BuildReport {
            page: PathBuf::from("index.html"),
            page_bytes: 1,
            assets: vec![],
            missing_assets_dir: Some(PathBuf::from("site/assets")),
            shadowed_assets: vec![],
        };
        let lines = format_build_output(&report);
        assert_eq!(lines[3], "    (none, site/assets not found)");
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 0 assets");
    }

    #[test]
    fn build_output_flags_shadowed_asset() {
        let report = BuildReport {
            page: PathBuf::from("index.html"),
            page_bytes: 10,
            assets: vec![PathBuf::from("Resume.pdf")],
            missing_assets_dir: None,
            shadowed_assets: vec![PathBuf::from("index.html")],
        };
        let lines = format_build_output(&report);
        assert!(lines.contains(&"    index.html (skipped, would replace index.html)".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 1 asset");
    }

    #[test]
    fn check_output_for_standard_catalog() {
        let lines = format_check_output(&Catalog::standard(), &[]);
        assert_eq!(
            lines,
            vec![
                "Catalog",
                "    9 certifications",
                "    10 skills (5 Technical, 5 Creative/Business)",
                "    2 education entries",
                "Findings",
                "    (none)",
            ]
        );
    }

    #[test]
    fn check_output_prefixes_severity() {
        let findings = vec![Finding::DuplicateCertificationId { id: "1" }];
        let lines = format_check_output(&Catalog::standard(), &findings);
        assert_eq!(
            lines.last().unwrap(),
            "    error: certification id '1' is used more than once"
        );
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "asset"), "1 asset");
        assert_eq!(plural(0, "asset"), "0 assets");
        assert_eq!(plural_with(2, "entry", "entries"), "2 entries");
    }
}
