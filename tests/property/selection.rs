//! Properties of the file selection rule

use codeflat::FileFilter;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

proptest! {
    /// A name with a configured suffix is always selected
    #[test]
    fn suffix_always_matches(stem in name_strategy(), ext in "\\.[a-z]{1,4}") {
        let filter = FileFilter::new([ext.clone()], Vec::<String>::new(), Vec::<String>::new());
        let name = format!("{}{}", stem, ext);
        prop_assert!(filter.matches_file(&name));
    }

    /// Selection is exactly "ends with an extension or equals a filename"
    #[test]
    fn selection_rule_is_suffix_or_exact(
        name in name_strategy(),
        exts in prop::collection::vec("\\.[a-z]{1,3}", 0..4),
        names in prop::collection::vec(name_strategy(), 0..4),
    ) {
        let filter = FileFilter::new(exts.clone(), names.clone(), Vec::<String>::new());
        let expected = exts.iter().any(|e| name.ends_with(e.as_str())) || names.contains(&name);
        prop_assert_eq!(filter.matches_file(&name), expected);
    }

    /// Uppercasing a lowercase extension never matches (case-sensitive rule)
    #[test]
    fn extension_match_is_case_sensitive(stem in "[a-z]{1,8}", ext in "\\.[a-z]{1,4}") {
        let filter = FileFilter::new([ext.clone()], Vec::<String>::new(), Vec::<String>::new());
        let name = format!("{}{}", stem, ext.to_uppercase());
        prop_assert!(!filter.matches_file(&name));
    }
}
