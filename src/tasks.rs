//! Task table: maps AutoTrain task names to backend task ids.

/// Known task names and their backend ids.
pub const TASKS: &[(&str, u32)] = &[
    ("text_binary_classification", 1),
    ("text_multi_class_classification", 2),
    ("text_entity_extraction", 4),
    ("text_extractive_question_answering", 5),
    ("text_summarization", 8),
    ("lm_training", 9),
    ("text_single_column_regression", 10),
    ("speech_recognition", 11),
    ("tabular_binary_classification", 13),
    ("tabular_multi_class_classification", 14),
    ("tabular_multi_label_classification", 15),
    ("tabular_single_column_regression", 16),
    ("image_binary_classification", 17),
    ("image_multi_class_classification", 18),
    ("natural_language_inference", 22),
    ("image_single_column_regression", 24),
    ("dreambooth", 25),
    ("seq2seq", 28),
];

/// Looks up the backend id for a task name.
pub fn task_id(name: &str) -> Option<u32> {
    TASKS
        .iter()
        .find(|(task, _)| *task == name)
        .map(|(_, id)| *id)
}

/// All valid task names, in table order.
pub fn task_names() -> Vec<String> {
    TASKS.iter().map(|(task, _)| (*task).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_task_resolves() {
        assert_eq!(task_id("text_binary_classification"), Some(1));
        assert_eq!(task_id("seq2seq"), Some(28));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(task_id("Text_Binary_Classification"), None);
        assert_eq!(task_id(""), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = TASKS.iter().map(|(_, id)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TASKS.len());
    }
}
