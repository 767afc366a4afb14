//!
//! Numeric input filter.
//!
//! The filter looks at an edit *before* it is applied to a text widget.
//! It builds the text that would result from the edit and checks it
//! with [NumericRules]. If the result is no longer a (partial) number
//! the edit is rejected and an [ErrorCue] is given.
//!
//! There are three entry points that correspond to the ways text
//! can get into a widget:
//!
//! * [NumericFilter::on_character_input] for typed characters.
//! * [NumericFilter::on_key_press] for special keys. Only space is
//!   checked, everything else passes.
//! * [NumericFilter::on_paste] for clipboard or bracketed paste.
//!

use crate::candidate::candidate_text;
use crate::numeric::NumericRules;
use crossterm::event::KeyCode;
use dyn_clone::{clone_box, DynClone};
use log::debug;
use pure_rust_locales::Locale;
use rat_text::text_input::TextInputState;
use std::fmt::Debug;
use std::io::Write;
use std::ops::Range;

/// Result of filtering one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Let the edit through.
    Accept,
    /// Suppress the edit.
    Reject,
}

impl FilterOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        *self == FilterOutcome::Accept
    }
}

impl From<bool> for FilterOutcome {
    fn from(value: bool) -> Self {
        if value {
            FilterOutcome::Accept
        } else {
            FilterOutcome::Reject
        }
    }
}

/// What the clipboard had to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PastePayload {
    /// Some text.
    Text(String),
    /// Anything that is not text. Or the clipboard failed.
    NonText,
}

/// The view of a text-field the filter needs.
pub trait EditTarget {
    /// Current text.
    fn text(&self) -> &str;

    /// Selected range. Grapheme positions.
    fn selection(&self) -> Range<usize>;

    /// Insert position. Grapheme position.
    fn caret(&self) -> usize;

    /// The next edit replaces all the text.
    fn overwrite(&self) -> bool {
        false
    }
}

impl EditTarget for TextInputState {
    fn text(&self) -> &str {
        TextInputState::text(self)
    }

    fn selection(&self) -> Range<usize> {
        let sel = TextInputState::selection(self);
        sel.start as usize..sel.end as usize
    }

    fn caret(&self) -> usize {
        // insert always happens at the start of the selection.
        if self.has_selection() {
            TextInputState::selection(self).start as usize
        } else {
            self.cursor() as usize
        }
    }

    fn overwrite(&self) -> bool {
        TextInputState::overwrite(self)
    }
}

/// Plain text with selection and caret.
#[derive(Debug, Default, Clone)]
pub struct EditSnapshot<'a> {
    pub text: &'a str,
    pub selection: Range<usize>,
    pub caret: usize,
}

impl<'a> EditSnapshot<'a> {
    /// Text with the caret at the given position and no selection.
    pub fn new(text: &'a str, caret: usize) -> Self {
        Self {
            text,
            selection: caret..caret,
            caret,
        }
    }

    /// Text with a selection. The caret is at the selection start.
    pub fn selected(text: &'a str, selection: Range<usize>) -> Self {
        Self {
            text,
            caret: selection.start,
            selection,
        }
    }
}

impl EditTarget for EditSnapshot<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn caret(&self) -> usize {
        self.caret
    }
}

/// Gives feedback for a rejected edit.
pub trait ErrorCue: DynClone + Debug {
    fn alert(&self);
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone)]
pub struct TerminalBell;

impl ErrorCue for TerminalBell {
    fn alert(&self) {
        let mut out = std::io::stdout();
        _ = out.write_all(b"\x07");
        _ = out.flush();
    }
}

/// Silence.
#[derive(Debug, Default, Clone)]
pub struct NoCue;

impl ErrorCue for NoCue {
    fn alert(&self) {}
}

impl Clone for Box<dyn ErrorCue> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

/// Filters edits for numeric content.
#[derive(Debug, Clone)]
pub struct NumericFilter {
    rules: NumericRules,
    cue: Box<dyn ErrorCue>,
}

impl Default for NumericFilter {
    fn default() -> Self {
        Self {
            rules: NumericRules::default(),
            cue: Box::new(TerminalBell),
        }
    }
}

impl NumericFilter {
    /// Accepts signed decimals with the system locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given locale.
    pub fn new_loc(locale: Locale) -> Self {
        Self {
            rules: NumericRules::new_loc(locale),
            cue: Box::new(TerminalBell),
        }
    }

    /// Reject any minus sign.
    pub fn only_positive(mut self, only_positive: bool) -> Self {
        self.rules.only_positive = only_positive;
        self
    }

    /// Only whole numbers.
    pub fn only_integer(mut self, only_integer: bool) -> Self {
        self.rules.only_integer = only_integer;
        self
    }

    /// Locale for the decimal separator.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.rules.set_locale(locale);
        self
    }

    /// Feedback for rejected edits.
    pub fn cue(mut self, cue: impl ErrorCue + 'static) -> Self {
        self.cue = Box::new(cue);
        self
    }
}

impl NumericFilter {
    #[inline]
    pub fn set_only_positive(&mut self, only_positive: bool) {
        self.rules.only_positive = only_positive;
    }

    #[inline]
    pub fn is_only_positive(&self) -> bool {
        self.rules.only_positive
    }

    #[inline]
    pub fn set_only_integer(&mut self, only_integer: bool) {
        self.rules.only_integer = only_integer;
    }

    #[inline]
    pub fn is_only_integer(&self) -> bool {
        self.rules.only_integer
    }

    #[inline]
    pub fn set_locale(&mut self, locale: Locale) {
        self.rules.set_locale(locale);
    }

    #[inline]
    pub fn get_locale(&self) -> Locale {
        self.rules.locale
    }

    #[inline]
    pub fn set_cue(&mut self, cue: impl ErrorCue + 'static) {
        self.cue = Box::new(cue);
    }

    #[inline]
    pub fn rules(&self) -> &NumericRules {
        &self.rules
    }
}

impl NumericFilter {
    /// Is this still a valid, maybe incomplete, number?
    #[inline]
    pub fn is_valid_input(&self, input: &str) -> bool {
        self.rules.is_valid_input(input)
    }

    /// The text that results from inserting `input` into the target.
    pub fn candidate(&self, target: &dyn EditTarget, input: &str) -> String {
        if target.overwrite() {
            input.to_string()
        } else {
            candidate_text(target.text(), target.selection(), target.caret(), input)
        }
    }

    /// A typed character.
    pub fn on_character_input(&self, target: &dyn EditTarget, c: char) -> FilterOutcome {
        let mut buf = [0u8; 4];
        self.check(target, c.encode_utf8(&mut buf))
    }

    /// A key press. Space is checked as if it were typed,
    /// all other keys pass.
    pub fn on_key_press(&self, target: &dyn EditTarget, key: KeyCode) -> FilterOutcome {
        match key {
            KeyCode::Char(' ') => self.check(target, " "),
            _ => FilterOutcome::Accept,
        }
    }

    /// Pasted content. Anything but text is rejected.
    pub fn on_paste(&self, target: &dyn EditTarget, payload: &PastePayload) -> FilterOutcome {
        match payload {
            PastePayload::Text(text) => self.check(target, text),
            PastePayload::NonText => {
                debug!("numeric-filter: reject non-text paste");
                self.cue.alert();
                FilterOutcome::Reject
            }
        }
    }

    fn check(&self, target: &dyn EditTarget, input: &str) -> FilterOutcome {
        let candidate = self.candidate(target, input);
        if self.rules.is_valid_input(&candidate) {
            FilterOutcome::Accept
        } else {
            debug!("numeric-filter: reject {:?}", candidate);
            self.cue.alert();
            FilterOutcome::Reject
        }
    }
}
