//! Property test generators for name and path handling
//!
//! Generators produce the kind of names found on real desktop filesystems:
//! mixed case, spaces, punctuation that FAT rejects, and extensions.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a messy name that still contains at least one letter or digit
    pub fn messy_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9 _!?<>&'()-]{0,20}"
    }

    /// Generate file extensions commonly found in media and document folders
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("mp3".to_string()),
            Just("flac".to_string()),
            Just("ogg".to_string()),
            Just("txt".to_string()),
            Just("PDF".to_string()),
            Just("jpg".to_string()),
            Just("tar.gz".to_string()),
            Just("".to_string()), // Files without extension
        ]
    }

    /// Generate a complete filename with extension
    pub fn file_name() -> impl Strategy<Value = String> {
        (Self::messy_name(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate absolute paths built from messy segments
    pub fn absolute_path() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(Self::messy_name(), 0..=4).prop_flat_map(|dirs| {
            Self::file_name().prop_map(move |file_name| {
                let mut segments = dirs.clone();
                segments.push(file_name);
                segments
            })
        })
    }

    /// Generate names with nothing a slug can keep
    pub fn unsluggable_name() -> impl Strategy<Value = String> {
        "[ _!?<>&'()*|-]{0,10}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn messy_names_start_with_alphanumeric(name in PathGenerators::messy_name()) {
            prop_assert!(name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()));
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn absolute_paths_end_with_a_file(segments in PathGenerators::absolute_path()) {
            prop_assert!(!segments.is_empty());
            prop_assert!(segments.len() <= 5);
        }

        #[test]
        fn unsluggable_names_have_no_alphanumerics(name in PathGenerators::unsluggable_name()) {
            prop_assert!(!name.chars().any(|c| c.is_alphanumeric()));
        }
    }
}
