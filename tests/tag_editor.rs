mod common;

use askmentor::state::{AppState, Focus, DUPLICATE_TAG_MESSAGE};
use askmentor::tags::{TagAdd, TagList, MAX_TAGS};
use askmentor::tui::handle_key;

use common::{key, signed_in, type_text};
use ratatui::crossterm::event::KeyCode;

fn on_tags() -> AppState {
    let mut state = signed_in();
    state.focus = Focus::Tags;
    state
}

#[test]
fn duplicate_tags_collapse_after_lowercasing() {
    let mut state = on_tags();
    type_text(&mut state, "react\nhooks\nREACT\n");

    assert_eq!(state.draft.tags.as_slice(), ["react", "hooks"]);
    assert_eq!(state.tag_input.value(), "");
}

#[test]
fn duplicate_tag_is_reported_and_cleared() {
    let mut state = on_tags();
    type_text(&mut state, "react\n Re");
    type_text(&mut state, "ACT\n");

    assert_eq!(state.draft.tags.as_slice(), ["react"]);
    assert_eq!(state.tag_input.value(), "");
    assert_eq!(state.status_message.as_deref(), Some(DUPLICATE_TAG_MESSAGE));

    type_text(&mut state, "hooks\n");
    assert_eq!(state.status_message, None);
}

#[test]
fn blank_input_adds_nothing() {
    let mut state = on_tags();
    type_text(&mut state, "\n   \n");
    assert!(state.draft.tags.is_empty());
}

#[test]
fn sixth_tag_is_refused_and_kept_in_the_input() {
    let mut state = on_tags();
    type_text(&mut state, "a\nb\nc\nd\ne\n");
    assert_eq!(state.draft.tags.len(), MAX_TAGS);
    assert_eq!(state.status_message, None);

    type_text(&mut state, "f\n");
    assert_eq!(state.draft.tags.as_slice(), ["a", "b", "c", "d", "e"]);
    assert_eq!(state.tag_input.value(), "f");
    assert_eq!(
        state.status_message.as_deref(),
        Some("Up to 5 tags per question")
    );

    // Freeing a slot lets the pending tag through.
    state.remove_tag("c");
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.draft.tags.as_slice(), ["a", "b", "d", "e", "f"]);
    assert_eq!(state.status_message, None);
}

#[test]
fn backspace_on_empty_input_selects_then_removes() {
    let mut state = on_tags();
    type_text(&mut state, "rust\ntokio\n");

    handle_key(key(KeyCode::Backspace), &mut state);
    assert_eq!(state.tag_cursor, Some(1));
    assert_eq!(state.draft.tags.len(), 2);

    handle_key(key(KeyCode::Backspace), &mut state);
    assert_eq!(state.draft.tags.as_slice(), ["rust"]);
    assert_eq!(state.tag_cursor, Some(0));

    handle_key(key(KeyCode::Delete), &mut state);
    assert!(state.draft.tags.is_empty());
    assert_eq!(state.tag_cursor, None);
}

#[test]
fn left_arrow_walks_into_the_chips() {
    let mut state = on_tags();
    type_text(&mut state, "one\ntwo\nthree\nx");

    // Cursor is inside the input, so Left moves the text cursor first.
    handle_key(key(KeyCode::Left), &mut state);
    assert_eq!(state.tag_cursor, None);
    assert_eq!(state.tag_input.cursor(), 0);

    handle_key(key(KeyCode::Left), &mut state);
    assert_eq!(state.tag_cursor, Some(2));
    handle_key(key(KeyCode::Left), &mut state);
    handle_key(key(KeyCode::Delete), &mut state);
    assert_eq!(state.draft.tags.as_slice(), ["one", "three"]);
    assert_eq!(state.tag_input.value(), "x");

    // Typing leaves chip selection.
    type_text(&mut state, "y");
    assert_eq!(state.tag_cursor, None);
    assert_eq!(state.tag_input.value(), "yx");
}

#[test]
fn removing_a_missing_tag_is_a_no_op() {
    let mut state = on_tags();
    type_text(&mut state, "go\n");
    state.remove_tag("rust");
    assert_eq!(state.draft.tags.as_slice(), ["go"]);
}

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }
}

#[test]
fn random_edits_keep_tags_bounded_unique_and_lowercase() {
    let words = [
        "React", "react", "Hooks", "SQL", "sql", " spring ", "Java", "", "  ", "K8s", "docs",
        "Testing", "JAVA",
    ];

    for seed in 0..200u64 {
        let mut rng = Lcg(seed);
        let mut tags = TagList::new();
        let mut model: Vec<String> = Vec::new();

        for _ in 0..40 {
            let word = rng.pick(&words);
            if rng.next() % 4 == 0 {
                let target = word.trim().to_lowercase();
                let removed = tags.remove(&target);
                let expected = model.iter().any(|t| *t == target);
                assert_eq!(removed, expected, "seed {}", seed);
                model.retain(|t| *t != target);
            } else {
                let outcome = tags.add(word);
                let normalized = word.trim().to_lowercase();
                let expected = if normalized.is_empty() {
                    TagAdd::Empty
                } else if model.len() >= MAX_TAGS {
                    TagAdd::Full
                } else if model.contains(&normalized) {
                    TagAdd::Duplicate
                } else {
                    model.push(normalized);
                    TagAdd::Added
                };
                assert_eq!(outcome, expected, "seed {} word {:?}", seed, word);
            }

            assert!(tags.len() <= MAX_TAGS);
            assert_eq!(tags.as_slice(), model.as_slice(), "seed {}", seed);
            for t in tags.as_slice() {
                assert_eq!(*t, t.to_lowercase());
                assert!(!t.trim().is_empty());
            }
        }
    }
}
