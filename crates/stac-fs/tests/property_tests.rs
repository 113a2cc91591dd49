use proptest::prelude::*;
use stac_fs::NormalizedPath;

proptest! {
    #[test]
    fn normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn join_then_strip_prefix_recovers_segment(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        segment in "[a-z_]{1,8}(/[a-z_.]{1,8}){0,3}",
    ) {
        let root = NormalizedPath::new(&base);
        let joined = root.join(&segment);
        let relative = joined.strip_prefix(&root).unwrap();
        prop_assert_eq!(relative.as_str(), segment.as_str());
    }
}
