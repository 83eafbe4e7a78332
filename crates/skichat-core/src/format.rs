//! Post-processing of raw model answers into the structured layout the UI
//! renders.
//!
//! Answers arrive as paragraphs separated by a blank line. Two transforms are
//! applied to every paragraph, in order:
//!
//! 1. **Header annotation** — the five recognized section labels each get a
//!    fixed emoji marker prefixed onto their literal occurrence. Matching is
//!    a case-insensitive substring test, but the replaced literal is
//!    fixed-case: a differently-cased header still matches, and the
//!    replacement is then a no-op. That asymmetry is intentional and covered
//!    by a regression test.
//!
//! 2. **Bulleting** — every non-empty line that is not already bulleted and
//!    does not contain a colon (a `label: value` line) is prefixed with
//!    `"• "`. Colon presence always wins over bulleting.
//!
//! The whole pass is a pure function of its input and idempotent: running it
//! on its own output changes nothing, and a header never collects a second
//! emoji.

/// Recognized section labels: lowercase needle, fixed-case literal, marker.
const SECTION_MARKERS: [(&str, &str, &str); 5] = [
    ("quick summary", "Quick Summary:", "🚨"),
    ("key conditions", "Key Conditions:", "🔍"),
    ("safety status", "Safety Status:", "⚠️"),
    ("trail conditions", "Trail Conditions:", "🎿"),
    ("recommendations", "Recommendations:", "✅"),
];

/// Format a raw model answer for rendering.
///
/// Splits on blank lines, annotates section headers, and normalizes lines to
/// bullet form. See the module docs for the exact rules.
pub fn format_response(content: &str) -> String {
    content
        .split("\n\n")
        .map(|section| bullet_lines(&annotate_header(section)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prefix the first matching section label with its emoji marker.
///
/// The first label whose lowercase form appears in the section wins; the
/// rest are not considered. Only the first occurrence of the fixed-case
/// literal is replaced. A section that already carries the annotated form is
/// returned unchanged so repeated formatting never stacks markers.
fn annotate_header(section: &str) -> String {
    let lower = section.to_lowercase();
    for (needle, literal, marker) in SECTION_MARKERS {
        if lower.contains(needle) {
            let annotated = format!("{marker} {literal}");
            if section.contains(&annotated) {
                return section.to_string();
            }
            return section.replacen(literal, &annotated, 1);
        }
    }
    section.to_string()
}

/// Normalize every line of a section to bullet form.
///
/// Lines already starting with the bullet glyph, lines containing a colon,
/// and blank lines pass through untouched; everything else gets a `"• "`
/// prefix.
fn bullet_lines(section: &str) -> String {
    section
        .split('\n')
        .map(|line| {
            if line.starts_with('•') || line.contains(':') || line.trim().is_empty() {
                line.to_string()
            } else {
                format!("• {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
