use proptest::prelude::*;
use std::path::PathBuf;
use testsift::ident::{classify, package_name, SourceRole};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn class_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,8}"
}

fn marker() -> impl Strategy<Value = SourceRole> {
    prop::sample::select(SourceRole::ALL.to_vec())
}

proptest! {
    #[test]
    fn package_name_joins_segments_with_dots(
        role in marker(),
        segments in prop::collection::vec(segment(), 1..5),
        name in class_name(),
    ) {
        let extension = match role.language() {
            testsift::ident::SourceLanguage::Java => "java",
            testsift::ident::SourceLanguage::Kotlin => "kt",
        };
        let tail = format!("{}/{}.{}", segments.join("/"), name, extension);
        prop_assume!(SourceRole::ALL.iter().all(|r| !tail.contains(r.marker())));
        let path = PathBuf::from(format!("app/{}{}", role.marker(), tail));
        let expected = format!("{}.{}", segments.join("."), name);
        prop_assert_eq!(package_name(&path).unwrap(), expected);
    }

    #[test]
    fn package_name_never_contains_separators(
        role in marker(),
        segments in prop::collection::vec(segment(), 1..5),
        name in class_name(),
    ) {
        let path = PathBuf::from(format!(
            "{}{}/{}.kt",
            role.marker(),
            segments.join("/"),
            name
        ));
        let ident = package_name(&path).unwrap();
        prop_assert!(!ident.contains('/'));
        prop_assert!(!ident.contains('\\'));
    }

    #[test]
    fn separator_convention_does_not_change_the_identifier(
        segments in prop::collection::vec(segment(), 1..5),
        name in class_name(),
    ) {
        let forward = format!("app/src/main/kotlin/{}/{}.kt", segments.join("/"), name);
        let backward = forward.replace('/', "\\");
        prop_assert_eq!(
            package_name(&PathBuf::from(forward)).unwrap(),
            package_name(&PathBuf::from(backward)).unwrap()
        );
    }

    #[test]
    fn classify_agrees_with_the_marker_used(
        role in marker(),
        segments in prop::collection::vec(segment(), 1..4),
        name in class_name(),
    ) {
        let tail = format!("{}/{}.kt", segments.join("/"), name);
        prop_assume!(SourceRole::ALL.iter().all(|r| !tail.contains(r.marker())));
        let path = PathBuf::from(format!("{}{}", role.marker(), tail));
        prop_assert_eq!(classify(&path).unwrap(), role);
    }

    #[test]
    fn unmarked_paths_always_fail(
        segments in prop::collection::vec(segment(), 1..5),
        name in class_name(),
    ) {
        let raw = format!("{}/{}.txt", segments.join("/"), name);
        prop_assume!(SourceRole::ALL.iter().all(|role| !raw.contains(role.marker())));
        prop_assert!(package_name(&PathBuf::from(raw)).is_err());
    }
}
