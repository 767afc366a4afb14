use crossterm::event::KeyCode;
use rat_numeric::filter::{
    EditSnapshot, ErrorCue, FilterOutcome, NoCue, NumericFilter, PastePayload,
};
use rat_numeric::Locale;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone)]
struct CountCue(Rc<Cell<u32>>);

impl ErrorCue for CountCue {
    fn alert(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn filter(only_positive: bool, only_integer: bool) -> NumericFilter {
    NumericFilter::new_loc(Locale::POSIX)
        .only_positive(only_positive)
        .only_integer(only_integer)
        .cue(NoCue)
}

#[test]
fn test_typing_digits() {
    let f = filter(false, false);
    let t = EditSnapshot::new("12", 2);
    assert_eq!(f.candidate(&t, "3"), "123");
    assert_eq!(f.on_character_input(&t, '3'), FilterOutcome::Accept);
}

#[test]
fn test_typing_minus_into_empty() {
    let f = filter(false, false);
    let t = EditSnapshot::new("", 0);
    assert_eq!(f.on_character_input(&t, '-'), FilterOutcome::Accept);
}

#[test]
fn test_minus_caret_position() {
    let f = filter(false, false);
    assert_eq!(
        f.on_character_input(&EditSnapshot::new("5", 0), '-'),
        FilterOutcome::Accept
    );
    assert_eq!(
        f.on_character_input(&EditSnapshot::new("5", 1), '-'),
        FilterOutcome::Reject
    );

    let f = filter(true, false);
    assert_eq!(
        f.on_character_input(&EditSnapshot::new("5", 0), '-'),
        FilterOutcome::Reject
    );
    assert_eq!(
        f.on_character_input(&EditSnapshot::new("5", 1), '-'),
        FilterOutcome::Reject
    );
}

#[test]
fn test_integer_rejects_decimal_text() {
    let f = filter(false, true);
    let t = EditSnapshot::new("1.2", 3);
    assert_eq!(f.candidate(&t, "3"), "1.23");
    assert_eq!(f.on_character_input(&t, '3'), FilterOutcome::Reject);

    let f = filter(false, false);
    assert_eq!(f.on_character_input(&t, '3'), FilterOutcome::Accept);
}

#[test]
fn test_selection_replaced() {
    let f = filter(false, true);
    // replacing the whole text with a minus is fine.
    let t = EditSnapshot::selected("123", 0..3);
    assert_eq!(f.on_character_input(&t, '-'), FilterOutcome::Accept);
    // replacing the tail with a minus is not.
    let t = EditSnapshot::selected("123", 1..3);
    assert_eq!(f.on_character_input(&t, '-'), FilterOutcome::Reject);
}

#[test]
fn test_space_key() {
    for (p, i) in [(false, false), (false, true), (true, false), (true, true)] {
        let f = filter(p, i);
        for caret in 0..=2 {
            let t = EditSnapshot::new("12", caret);
            assert_eq!(f.on_key_press(&t, KeyCode::Char(' ')), FilterOutcome::Reject);
        }
    }
}

#[test]
fn test_other_keys_pass() {
    let f = filter(false, false);
    let t = EditSnapshot::new("12", 2);
    assert_eq!(f.on_key_press(&t, KeyCode::Backspace), FilterOutcome::Accept);
    assert_eq!(f.on_key_press(&t, KeyCode::Left), FilterOutcome::Accept);
    assert_eq!(f.on_key_press(&t, KeyCode::Enter), FilterOutcome::Accept);
}

#[test]
fn test_paste() {
    let f = filter(false, false);
    let t = EditSnapshot::new("1", 1);
    assert_eq!(
        f.on_paste(&t, &PastePayload::Text("23.5".into())),
        FilterOutcome::Accept
    );
    assert_eq!(
        f.on_paste(&t, &PastePayload::Text("2 3".into())),
        FilterOutcome::Reject
    );
    assert_eq!(
        f.on_paste(&t, &PastePayload::Text("abc".into())),
        FilterOutcome::Reject
    );
}

#[test]
fn test_paste_non_text() {
    for (p, i) in [(false, false), (false, true), (true, false), (true, true)] {
        let f = filter(p, i);
        let t = EditSnapshot::new("", 0);
        assert_eq!(f.on_paste(&t, &PastePayload::NonText), FilterOutcome::Reject);
    }
}

#[test]
fn test_cue() {
    let cue = CountCue::default();
    let f = filter(false, false).cue(cue.clone());
    let t = EditSnapshot::new("12", 2);

    assert!(f.on_character_input(&t, '3').is_accepted());
    assert_eq!(cue.0.get(), 0);

    assert!(!f.on_character_input(&t, 'x').is_accepted());
    assert_eq!(cue.0.get(), 1);

    assert!(!f.on_key_press(&t, KeyCode::Char(' ')).is_accepted());
    assert_eq!(cue.0.get(), 2);

    assert!(!f.on_paste(&t, &PastePayload::NonText).is_accepted());
    assert_eq!(cue.0.get(), 3);

    // the cloned filter shares the cue.
    let f2 = f.clone();
    assert!(!f2.on_character_input(&t, '-').is_accepted());
    assert_eq!(cue.0.get(), 4);
}

#[test]
fn test_config() {
    let mut f = filter(false, false);
    assert!(!f.is_only_positive());
    assert!(!f.is_only_integer());

    let t = EditSnapshot::new("1", 1);
    assert!(f.on_character_input(&t, '.').is_accepted());

    f.set_only_integer(true);
    assert!(f.is_only_integer());
    assert!(!f.on_character_input(&t, '.').is_accepted());

    let t = EditSnapshot::new("1", 0);
    assert!(f.on_character_input(&t, '-').is_accepted());
    f.set_only_positive(true);
    assert!(!f.on_character_input(&t, '-').is_accepted());

    f.set_locale(Locale::de_AT);
    assert!(matches!(f.get_locale(), Locale::de_AT));
    assert_eq!(f.rules().decimal_sep, ',');
}
