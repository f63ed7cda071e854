//! Display-name cleaning for cartridge file names.
//!
//! Release naming conventions pack region and revision tags into the file
//! name (`Super_Mario_Bros_(USA)[!].nes`). The catalog shows the title
//! without them.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest `( ... )` group.
static PAREN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("paren tag pattern is valid"));

/// Shortest `[ ... ]` group.
static BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("bracket tag pattern is valid"));

/// Title used when nothing printable survives cleaning.
const UNTITLED: &str = "Untitled";

/// Derive the catalog title from a file name.
///
/// Steps:
/// 1. Strip a trailing alphanumeric extension
/// 2. Remove `(...)` and `[...]` tags, plus any unbalanced bracket left over
/// 3. Replace underscores with spaces and trim
///
/// If that leaves nothing, the tag contents are kept instead (`(USA).nes`
/// becomes `USA`), and if even that is blank the title is `Untitled`. The
/// result is never empty and never contains brackets or underscores.
pub fn clean_display_name(file_name: &str) -> String {
    let stem = strip_extension(file_name);

    let without_tags = PAREN_TAG.replace_all(stem, "");
    let without_tags = BRACKET_TAG.replace_all(&without_tags, "");
    let cleaned = normalize(&without_tags);
    if !cleaned.is_empty() {
        return cleaned;
    }

    let fallback = normalize(stem);
    if fallback.is_empty() {
        UNTITLED.to_string()
    } else {
        fallback
    }
}

/// Remove the text after the last `.`.
///
/// A leading dot is not an extension separator, and neither is a dot whose
/// suffix contains anything but ASCII letters and digits (with at least one
/// letter). `Dr. Mario` and `Super Mario Bros. 3` keep their dots.
fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && is_extension(ext) => stem,
        _ => file_name,
    }
}

fn is_extension(ext: &str) -> bool {
    ext.chars().all(|c| c.is_ascii_alphanumeric()) && ext.chars().any(|c| c.is_ascii_alphabetic())
}

/// Drop bracket characters, turn underscores into spaces, trim.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .map(|c| if c == '_' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_name() {
        assert_eq!(
            clean_display_name("Super_Mario_Bros_(USA)[!].nes"),
            "Super Mario Bros"
        );
    }

    #[test]
    fn test_multiple_tags() {
        assert_eq!(
            clean_display_name("Legend of Zelda, The (U) (PRG1) [!].nes"),
            "Legend of Zelda, The"
        );
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(clean_display_name("CONTRA.NES"), "CONTRA");
        assert_eq!(clean_display_name("Mega_Man_2.Nsf"), "Mega Man 2");
    }

    #[test]
    fn test_any_extension_stripped() {
        assert_eq!(clean_display_name("Tetris.fds"), "Tetris");
        assert_eq!(clean_display_name("Duck_Hunt_(W).unf"), "Duck Hunt");
        assert_eq!(clean_display_name("readme.TXT"), "readme");
    }

    #[test]
    fn test_title_dots_kept() {
        assert_eq!(clean_display_name("Dr. Mario"), "Dr. Mario");
        assert_eq!(clean_display_name("Super Mario Bros. 3"), "Super Mario Bros. 3");
        assert_eq!(clean_display_name("Super Mario Bros. 3.nes"), "Super Mario Bros. 3");
        assert_eq!(clean_display_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_tags_are_non_greedy() {
        assert_eq!(clean_display_name("A (x) B (y) C.nes"), "A  B  C");
    }

    #[test]
    fn test_unbalanced_brackets_removed() {
        assert_eq!(clean_display_name("Contra (J.nes"), "Contra J");
        assert_eq!(clean_display_name("Kirby]_Adventure.nes"), "Kirby Adventure");
    }

    #[test]
    fn test_only_tags_falls_back_to_tag_contents() {
        assert_eq!(clean_display_name("(USA).nes"), "USA");
        assert_eq!(clean_display_name("[!]_(E).nes"), "! E");
    }

    #[test]
    fn test_blank_falls_back_to_untitled() {
        assert_eq!(clean_display_name("().nes"), "Untitled");
        assert_eq!(clean_display_name("___.nes"), "Untitled");
        assert_eq!(clean_display_name(""), "Untitled");
    }

    #[test]
    fn test_idempotent_on_clean_names() {
        for name in ["Super Mario Bros", "Dr. Mario", "Tetris", "Castlevania III"] {
            let once = clean_display_name(name);
            assert_eq!(once, name);
            assert_eq!(clean_display_name(&once), once);
        }
    }

    #[test]
    fn test_cleaned_names_have_no_tag_characters() {
        let names = [
            "Super_Mario_Bros_(USA)[!].nes",
            "(().nes",
            "[[x]].nsf",
            "a_(b_[c)_d].nes",
            "_).NES",
            "Metroid (E) [T+Fre].nes",
            "Gyromite_(W).unif",
        ];
        for name in names {
            let cleaned = clean_display_name(name);
            assert!(!cleaned.is_empty(), "{name}");
            for c in ['(', ')', '[', ']', '_'] {
                assert!(!cleaned.contains(c), "{name} -> {cleaned}");
            }
            let lower = cleaned.to_lowercase();
            for ext in [".nes", ".nsf", ".unif"] {
                assert!(!lower.ends_with(ext), "{name} -> {cleaned}");
            }
        }
    }
}
