use crate::models::{Flashcard, QuizQuestion, Records, StudyMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Load failures at the start-action boundary.
#[derive(Debug)]
pub enum LoadError {
    /// The resource could not be retrieved (missing or unreadable file).
    Fetch(String, String),
    /// The resource was retrieved but is not well-formed data.
    Parse(String, String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(path, err) => write!(f, "could not read {}: {}", path, err),
            LoadError::Parse(path, err) => write!(f, "invalid data in {}: {}", path, err),
        }
    }
}

impl std::error::Error for LoadError {}

/// Resolve the data file for a (subject, chapter, mode) triple. The
/// flashcard-quiz mode reads the flashcards file: it synthesizes its own
/// questions from card backs. The "quizes" directory name is fixed by the
/// existing data layout.
pub fn resource_path(data_dir: &Path, subject: &str, chapter: &str, mode: StudyMode) -> PathBuf {
    let namespace = match mode {
        StudyMode::Flashcards | StudyMode::FlashcardQuiz => "flashcards",
        StudyMode::Quiz => "quizes",
    };
    data_dir
        .join(namespace)
        .join(subject)
        .join(format!("chapter{}.json", chapter))
}

/// Read and parse the records for one session. An empty file is a valid
/// result, not an error; callers render it as the no-data state. No caching:
/// every start action re-reads the file.
pub fn load_records(
    data_dir: &Path,
    subject: &str,
    chapter: &str,
    mode: StudyMode,
) -> Result<Records, LoadError> {
    let path = resource_path(data_dir, subject, chapter, mode);
    let shown = path.display().to_string();

    let content =
        fs::read_to_string(&path).map_err(|e| LoadError::Fetch(shown.clone(), e.to_string()))?;

    match mode {
        StudyMode::Flashcards | StudyMode::FlashcardQuiz => {
            let cards: Vec<Flashcard> = serde_json::from_str(&content)
                .map_err(|e| LoadError::Parse(shown, e.to_string()))?;
            Ok(Records::Cards(cards))
        }
        StudyMode::Quiz => {
            let questions: Vec<QuizQuestion> = serde_json::from_str(&content)
                .map_err(|e| LoadError::Parse(shown, e.to_string()))?;
            Ok(Records::Questions(questions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_deck(dir: &Path, namespace: &str, subject: &str, chapter: &str, body: &str) {
        let subject_dir = dir.join(namespace).join(subject);
        fs::create_dir_all(&subject_dir).unwrap();
        fs::write(subject_dir.join(format!("chapter{}.json", chapter)), body).unwrap();
    }

    #[test]
    fn test_resource_path_convention() {
        let base = Path::new("data");
        assert_eq!(
            resource_path(base, "hrmt", "5", StudyMode::Flashcards),
            Path::new("data/flashcards/hrmt/chapter5.json")
        );
        assert_eq!(
            resource_path(base, "orgb", "11", StudyMode::Quiz),
            Path::new("data/quizes/orgb/chapter11.json")
        );
    }

    #[test]
    fn test_flashcard_quiz_reuses_flashcards_path() {
        let base = Path::new("data");
        assert_eq!(
            resource_path(base, "hrmt", "5", StudyMode::FlashcardQuiz),
            resource_path(base, "hrmt", "5", StudyMode::Flashcards)
        );
    }

    #[test]
    fn test_load_flashcards() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(
            dir.path(),
            "flashcards",
            "hrmt",
            "5",
            r#"[{"front":"A","back":"1"},{"front":"B","back":"2"}]"#,
        );

        let records = load_records(dir.path(), "hrmt", "5", StudyMode::Flashcards).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.cards()[0].front, "A");
        assert_eq!(records.cards()[1].back, "2");
    }

    #[test]
    fn test_load_quiz_questions() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(
            dir.path(),
            "quizes",
            "orgb",
            "7",
            r#"[{"question":"Q","options":["X","Y"],"correct_answer":"Y","explanation":"why"}]"#,
        );

        let records = load_records(dir.path(), "orgb", "7", StudyMode::Quiz).unwrap();
        assert_eq!(records.len(), 1);
        let q = &records.questions()[0];
        assert_eq!(q.correct_answer, "Y");
        assert_eq!(q.explanation.as_deref(), Some("why"));
    }

    #[test]
    fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path(), "hrmt", "99", StudyMode::Flashcards).unwrap_err();
        match &err {
            LoadError::Fetch(path, _) => assert!(path.contains("chapter99.json")),
            other => panic!("expected Fetch error, got {:?}", other),
        }
        assert!(err.to_string().contains("chapter99.json"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(dir.path(), "flashcards", "hrmt", "5", "not json");

        let err = load_records(dir.path(), "hrmt", "5", StudyMode::Flashcards).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_, _)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(
            dir.path(),
            "quizes",
            "hrmt",
            "5",
            r#"[{"question":"Q","options":"not a list","correct_answer":"Y"}]"#,
        );

        let err = load_records(dir.path(), "hrmt", "5", StudyMode::Quiz).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_, _)));
    }

    #[test]
    fn test_empty_file_is_ok_not_error() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(dir.path(), "flashcards", "hrmt", "5", "[]");

        let records = load_records(dir.path(), "hrmt", "5", StudyMode::Flashcards).unwrap();
        assert!(records.is_empty());
    }
}
