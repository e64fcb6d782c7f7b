//! Scorer
//!
//! Compares the recovered answer sequence against the supplied key and
//! produces the result record: percentage score, per-question detail, and
//! a human-readable feedback line naming the wrong question numbers.

use crate::models::{AnswerStatus, GradingResult, KeyEntry, QuestionDetail};

/// Wrong question numbers shown explicitly before the feedback is elided.
const FEEDBACK_WRONG_LIMIT: usize = 10;

/// Score detected answers against an answer key.
///
/// Comparison walks `min(detected, key)` positions, case-insensitively.
/// The score denominator is always the key length, so missing detections
/// count against the student but never cause an error. The returned
/// `answers` vector is padded with empty strings (or truncated) to the
/// key length.
pub fn score_answers(detected: &[Option<char>], key: &[KeyEntry]) -> GradingResult {
    let total_questions = key.len();
    let key_letters: Vec<char> = key.iter().map(KeyEntry::as_letter).collect();

    let loop_len = detected.len().min(total_questions);
    let mut correct_count = 0usize;
    let mut details = Vec::with_capacity(loop_len);
    let mut wrong_numbers: Vec<usize> = Vec::new();

    for (i, &key_letter) in key_letters.iter().enumerate().take(loop_len) {
        let student = detected[i].map(|c| c.to_ascii_uppercase());
        let is_correct = student == Some(key_letter);
        if is_correct {
            correct_count += 1;
        } else {
            wrong_numbers.push(i + 1);
        }
        details.push(QuestionDetail {
            no: i + 1,
            student_ans: student.map(String::from).unwrap_or_default(),
            key: key_letter.to_string(),
            status: if is_correct {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Wrong
            },
        });
    }

    let score = if total_questions == 0 {
        0.0
    } else {
        let raw = correct_count as f64 / total_questions as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    };

    let mut answers: Vec<String> = detected
        .iter()
        .take(total_questions)
        .map(|a| a.map(String::from).unwrap_or_default())
        .collect();
    answers.resize(total_questions, String::new());

    GradingResult {
        score,
        max_score: 100,
        correct_count,
        total_questions,
        answers,
        details,
        feedback: build_feedback(&wrong_numbers),
    }
}

/// One-line summary of what went wrong, capped to keep it readable.
fn build_feedback(wrong_numbers: &[usize]) -> String {
    if wrong_numbers.is_empty() {
        return "Perfect! All answers correct.".to_string();
    }

    let shown: Vec<String> = wrong_numbers
        .iter()
        .take(FEEDBACK_WRONG_LIMIT)
        .map(|n| n.to_string())
        .collect();
    if wrong_numbers.len() > FEEDBACK_WRONG_LIMIT {
        format!(
            "Wrong on {} questions (no: {}, ...)",
            wrong_numbers.len(),
            shown.join(", ")
        )
    } else {
        format!(
            "Wrong on {} questions (no: {}).",
            wrong_numbers.len(),
            shown.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Option<char>> {
        s.chars()
            .map(|c| if c == '_' { None } else { Some(c) })
            .collect()
    }

    fn index_key(indices: &[u8]) -> Vec<KeyEntry> {
        indices.iter().map(|&i| KeyEntry::Index(i)).collect()
    }

    #[test]
    fn test_perfect_score() {
        let result = score_answers(&letters("ABCD"), &index_key(&[0, 1, 2, 3]));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.correct_count, 4);
        assert_eq!(result.total_questions, 4);
        assert_eq!(result.feedback, "Perfect! All answers correct.");
        assert!(result.details.iter().all(|d| d.status == AnswerStatus::Correct));
    }

    #[test]
    fn test_partial_score_names_wrong_questions() {
        // Key A,B,C,D,E vs detected A,C,C,D,B: questions 2 and 5 wrong.
        let result = score_answers(&letters("ACCDB"), &index_key(&[0, 1, 2, 3, 4]));
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.score, 60.0);
        assert!(result.feedback.contains("2"));
        assert!(result.feedback.contains("5"));
        assert_eq!(result.details[1].status, AnswerStatus::Wrong);
        assert_eq!(result.details[4].status, AnswerStatus::Wrong);
    }

    #[test]
    fn test_key_format_equivalence() {
        let detected = letters("ABC");
        let by_index = score_answers(&detected, &index_key(&[0, 1, 2]));
        let by_letter = score_answers(
            &detected,
            &["A", "B", "C"]
                .map(|s| KeyEntry::Letter(s.to_string()))
                .to_vec(),
        );
        assert_eq!(by_index, by_letter);
    }

    #[test]
    fn test_case_insensitive_key_letters() {
        let key = vec![KeyEntry::Letter("a".into()), KeyEntry::Letter("B".into())];
        let result = score_answers(&letters("AB"), &key);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_shorter_detection_does_not_raise() {
        let result = score_answers(&letters("AB"), &index_key(&[0, 1, 2, 3]));
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.details.len(), 2);
        // answers padded to key length
        assert_eq!(result.answers, vec!["A", "B", "", ""]);
    }

    #[test]
    fn test_longer_detection_is_truncated() {
        let result = score_answers(&letters("ABCDE"), &index_key(&[0, 1]));
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.answers, vec!["A", "B"]);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let result = score_answers(&letters("A_C"), &index_key(&[0, 1, 2]));
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.answers[1], "");
        assert_eq!(result.details[1].status, AnswerStatus::Wrong);
    }

    #[test]
    fn test_out_of_range_index_never_matches() {
        let result = score_answers(&letters("A"), &index_key(&[9]));
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.details[0].key, "?");
    }

    #[test]
    fn test_score_bounds() {
        for detected in ["", "A", "ABCD", "DDDD"] {
            let result = score_answers(&letters(detected), &index_key(&[0, 1, 2, 3]));
            assert!(result.score >= 0.0 && result.score <= 100.0);
            let all_match = result.correct_count == result.total_questions;
            assert_eq!(result.score == 100.0, all_match);
        }
    }

    #[test]
    fn test_feedback_caps_listed_questions() {
        // 15 questions, all wrong.
        let key = index_key(&[0; 15]);
        let result = score_answers(&letters("BBBBBBBBBBBBBBB"), &key);
        assert!(result.feedback.contains("15 questions"));
        assert!(result.feedback.contains("10"));
        assert!(result.feedback.contains(", ..."));
        assert!(!result.feedback.contains("11"));
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 1 of 3 correct: 33.333... rounds to 33.33
        let result = score_answers(&letters("ABB"), &index_key(&[0, 1, 2]));
        assert_eq!(result.correct_count, 2);
        let result = score_answers(&letters("ADD"), &index_key(&[0, 1, 2]));
        assert_eq!(result.score, 33.33);
    }
}
