/// A subject and the chapters that exist for it. Chapter entries are just
/// the number part ("5", "6", etc); the loader builds the file name.
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub chapters: &'static [&'static str],
}

pub fn subjects() -> &'static [Subject] {
    &[
        Subject {
            id: "hrmt",
            name: "HRMT",
            chapters: &["5", "6", "7", "8"],
        },
        Subject {
            id: "orgb",
            name: "ORGB",
            chapters: &["5", "6", "7", "11", "14"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subjects_not_empty() {
        assert!(!subjects().is_empty());
    }

    #[test]
    fn test_every_subject_has_chapters() {
        for subject in subjects() {
            assert!(
                !subject.chapters.is_empty(),
                "subject {} has no chapters",
                subject.id
            );
        }
    }
}
