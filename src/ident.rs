use crate::errors::{Result, SiftError};
use std::path::Path;

pub const JAVA_EXTENSION: &str = ".java";
pub const KOTLIN_EXTENSION: &str = ".kt";

/// Source language of a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Java,
    Kotlin,
}

impl SourceLanguage {
    /// File extensions considered part of the corpus.
    pub fn extensions() -> &'static [&'static str] {
        &["java", "kt"]
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLanguage::Java => write!(f, "java"),
            SourceLanguage::Kotlin => write!(f, "kotlin"),
        }
    }
}

/// Role of a source file, derived from its source-root marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    MainJava,
    TestJava,
    UiTestJava,
    MainKotlin,
    TestKotlin,
    UiTestKotlin,
}

impl SourceRole {
    /// All roles in marker-priority order. The first marker found in a path
    /// decides the role, so this order is part of the contract.
    pub const ALL: [SourceRole; 6] = [
        SourceRole::MainJava,
        SourceRole::TestJava,
        SourceRole::UiTestJava,
        SourceRole::MainKotlin,
        SourceRole::TestKotlin,
        SourceRole::UiTestKotlin,
    ];

    /// The path substring that marks this role's source root.
    pub fn marker(&self) -> &'static str {
        match self {
            SourceRole::MainJava => "src/main/java/",
            SourceRole::TestJava => "src/test/java/",
            SourceRole::UiTestJava => "src/androidTest/java/",
            SourceRole::MainKotlin => "src/main/kotlin/",
            SourceRole::TestKotlin => "src/test/kotlin/",
            SourceRole::UiTestKotlin => "src/androidTest/kotlin/",
        }
    }

    pub fn language(&self) -> SourceLanguage {
        match self {
            SourceRole::MainJava | SourceRole::TestJava | SourceRole::UiTestJava => {
                SourceLanguage::Java
            }
            SourceRole::MainKotlin | SourceRole::TestKotlin | SourceRole::UiTestKotlin => {
                SourceLanguage::Kotlin
            }
        }
    }

    pub fn is_ui_test(&self) -> bool {
        matches!(self, SourceRole::UiTestJava | SourceRole::UiTestKotlin)
    }
}

/// Default search pattern: the Java UI-test source root.
pub fn ui_test_pattern() -> &'static str {
    SourceRole::UiTestJava.marker()
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Classify a path by the first source-root marker it contains.
pub fn classify(path: &Path) -> Result<SourceRole> {
    let normalized = normalize_separators(path);
    SourceRole::ALL
        .into_iter()
        .find(|role| normalized.contains(role.marker()))
        .ok_or_else(|| SiftError::UnrecognizedSourceRoot {
            path: path.to_path_buf(),
        })
}

/// Convert a source path into its dot-separated package name.
///
/// Everything up to and including the first source-root marker is stripped,
/// remaining separators become dots, and a trailing `.java` or `.kt`
/// extension is removed. Fails when the path contains no recognized marker.
pub fn package_name(path: &Path) -> Result<String> {
    let normalized = normalize_separators(path);
    for role in SourceRole::ALL {
        // Split on the first marker occurrence and keep the tail.
        if let Some((_, tail)) = normalized.split_once(role.marker()) {
            let dotted = tail.replace('/', ".");
            let dotted = dotted.strip_suffix(JAVA_EXTENSION).unwrap_or(&dotted);
            let dotted = dotted.strip_suffix(KOTLIN_EXTENSION).unwrap_or(dotted);
            return Ok(dotted.to_string());
        }
    }
    Err(SiftError::UnrecognizedSourceRoot {
        path: path.to_path_buf(),
    })
}
