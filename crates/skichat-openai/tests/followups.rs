//! Tests for follow-up question parsing.

use skichat_openai::followups::parse_follow_ups;

#[test]
fn keeps_at_most_three_questions_in_order() {
    let raw = "What is the avalanche risk?\nAre all lifts open?\nWhat gear do I need?\nIs there night skiing?";
    let questions = parse_follow_ups(raw);
    assert_eq!(
        questions,
        vec![
            "What is the avalanche risk?",
            "Are all lifts open?",
            "What gear do I need?",
        ]
    );
}

#[test]
fn drops_blank_and_whitespace_only_lines() {
    let raw = "\n  \nFirst?\n\t\nSecond?\n\n";
    let questions = parse_follow_ups(raw);
    assert_eq!(questions, vec!["First?", "Second?"]);
}

#[test]
fn fewer_than_three_lines_are_never_padded() {
    assert_eq!(parse_follow_ups("Only one?"), vec!["Only one?"]);
    assert!(parse_follow_ups("").is_empty());
    assert!(parse_follow_ups("   \n \n").is_empty());
}

#[test]
fn no_entry_is_blank_for_any_input() {
    let inputs = [
        "a\n\nb\n\nc\n\nd",
        "\n\n\n",
        "  padded  \nplain",
        "one\r\ntwo",
    ];
    for raw in inputs {
        let questions = parse_follow_ups(raw);
        assert!(questions.len() <= 3, "more than three for {raw:?}");
        for q in &questions {
            assert!(!q.trim().is_empty(), "blank entry for {raw:?}");
        }
    }
}

#[test]
fn lines_are_kept_verbatim() {
    let questions = parse_follow_ups("  1. What about the weather?  ");
    assert_eq!(questions, vec!["  1. What about the weather?  "]);
}
