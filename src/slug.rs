//! Slug generation

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Turn an arbitrary string into a lowercase, hyphen-separated slug
///
/// The input is NFKD-decomposed first: diacritics are stripped and
/// compatibility forms (ligatures, fullwidth letters) fold to their plain
/// letters. Letters and digits are then kept (lowercased). Every run of
/// anything else becomes a single `-`, and runs at either end are dropped. The
/// result may be empty when the input has no letters or digits at all.
///
/// # Examples
/// ```
/// use fatcp::slugify;
///
/// assert_eq!(slugify("Sub Dir!"), "sub-dir");
/// assert_eq!(slugify("  --Hello,  World--  "), "hello-world");
/// assert_eq!(slugify("Café Über"), "cafe-uber");
/// assert_eq!(slugify("???"), "");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.nfkd() {
        // Marks split off by decomposition vanish without breaking a word
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.extend(ch.to_lowercase().filter(|c| !is_combining_mark(*c)));
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
