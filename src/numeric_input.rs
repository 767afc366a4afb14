//!
//! Text input that only accepts numbers.
//!
//! This is a [TextInput] with a [NumericFilter] attached. The filter
//! sees every typed character, space and paste before the text widget
//! does, and suppresses anything that wouldn't leave a valid
//! (partial) number behind.
//!
//! Deleting text is never filtered.
//!
//! The filter can be detached and reattached at any time. Without a
//! filter this behaves exactly like a TextInput.
//!

use crate::_private::NonExhaustive;
use crate::event::{ReadOnly, TextOutcome};
use crate::filter::{FilterOutcome, NumericFilter, PastePayload};
use crate::numeric::{decimal_separator, parse_decimal, system_locale, INVARIANT_DECIMAL_SEP};
use crate::NumericError;
use crossterm::event::KeyCode;
use log::debug;
use rat_event::{ct_event, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::RelocatableState;
use rat_text::clipboard::Clipboard;
use rat_text::text_input::{TextInput, TextInputState};
use rat_text::{HasScreenCursor, TextFocusGained, TextFocusLost, TextStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, StatefulWidget};
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use std::num::IntErrorKind;

/// Numeric input widget.
///
/// # Stateful
/// This widget implements [`StatefulWidget`], you can use it with
/// [`NumericInputState`] to handle common actions.
#[derive(Debug, Default, Clone)]
pub struct NumericInput<'a> {
    widget: TextInput<'a>,
}

/// State & event handling.
#[derive(Debug, Clone)]
pub struct NumericInputState {
    /// Text input.
    /// __read+write__
    pub widget: TextInputState,
    /// Attached filter.
    /// __read only__ use [attach](NumericInputState::attach) and
    /// [detach](NumericInputState::detach)
    filter: Option<NumericFilter>,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> NumericInput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the combined style.
    #[inline]
    pub fn styles(mut self, style: TextStyle) -> Self {
        self.widget = self.widget.styles(style);
        self
    }

    /// Base text style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.style(style);
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.focus_style(style);
        self
    }

    /// Style for selection
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.select_style(style);
        self
    }

    /// Style for the invalid indicator.
    #[inline]
    pub fn invalid_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.invalid_style(style);
        self
    }

    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.widget = self.widget.block(block);
        self
    }

    /// Focus behaviour
    #[inline]
    pub fn on_focus_gained(mut self, of: TextFocusGained) -> Self {
        self.widget = self.widget.on_focus_gained(of);
        self
    }

    /// Focus behaviour
    #[inline]
    pub fn on_focus_lost(mut self, of: TextFocusLost) -> Self {
        self.widget = self.widget.on_focus_lost(of);
        self
    }
}

impl StatefulWidget for &NumericInput<'_> {
    type State = NumericInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        (&self.widget).render(area, buf, &mut state.widget);
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl StatefulWidgetRef for NumericInput<'_> {
    type State = NumericInputState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.widget.render_ref(area, buf, &mut state.widget);
    }
}

impl StatefulWidget for NumericInput<'_> {
    type State = NumericInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.widget.render(area, buf, &mut state.widget);
    }
}

impl Default for NumericInputState {
    fn default() -> Self {
        Self {
            widget: Default::default(),
            filter: Some(NumericFilter::default()),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for NumericInputState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.widget.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.widget.area
    }
}

impl HasScreenCursor for NumericInputState {
    #[inline]
    fn screen_cursor(&self) -> Option<(u16, u16)> {
        self.widget.screen_cursor()
    }
}

impl RelocatableState for NumericInputState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.widget.relocate(shift, clip);
    }
}

impl NumericInputState {
    /// New state with a default filter attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            widget: TextInputState::named(name),
            ..Default::default()
        }
    }

    /// New state with the given filter attached.
    pub fn with_filter(filter: NumericFilter) -> Self {
        Self {
            filter: Some(filter),
            ..Default::default()
        }
    }
}

impl NumericInputState {
    /// Attach a filter.
    ///
    /// Returns the filter that was attached before.
    pub fn attach(&mut self, filter: NumericFilter) -> Option<NumericFilter> {
        debug!("numeric-input: attach filter");
        self.filter.replace(filter)
    }

    /// Detach the filter.
    ///
    /// From now on all input goes unchecked to the text widget.
    pub fn detach(&mut self) -> Option<NumericFilter> {
        debug!("numeric-input: detach filter");
        self.filter.take()
    }

    /// Is a filter attached.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.filter.is_some()
    }

    #[inline]
    pub fn filter(&self) -> Option<&NumericFilter> {
        self.filter.as_ref()
    }

    #[inline]
    pub fn filter_mut(&mut self) -> Option<&mut NumericFilter> {
        self.filter.as_mut()
    }

    /// Reject any minus sign.
    /// Does nothing if no filter is attached.
    pub fn set_only_positive(&mut self, only_positive: bool) {
        if let Some(filter) = &mut self.filter {
            filter.set_only_positive(only_positive);
        }
    }

    #[inline]
    pub fn only_positive(&self) -> bool {
        self.filter.as_ref().is_some_and(|v| v.is_only_positive())
    }

    /// Only whole numbers.
    /// Does nothing if no filter is attached.
    pub fn set_only_integer(&mut self, only_integer: bool) {
        if let Some(filter) = &mut self.filter {
            filter.set_only_integer(only_integer);
        }
    }

    #[inline]
    pub fn only_integer(&self) -> bool {
        self.filter.as_ref().is_some_and(|v| v.is_only_integer())
    }
}

impl NumericInputState {
    /// Text value.
    #[inline]
    pub fn text(&self) -> &str {
        self.widget.text()
    }

    /// Set the text. This is not checked.
    #[inline]
    pub fn set_text<S: Into<String>>(&mut self, s: S) {
        self.widget.set_text(s);
    }

    /// Empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widget.is_empty()
    }

    /// Reset to empty.
    #[inline]
    pub fn clear(&mut self) -> bool {
        self.widget.clear()
    }

    /// Parse the text as integer.
    pub fn value_i64(&self) -> Result<i64, NumericError> {
        let text = self.complete_text()?;
        text.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                NumericError::OutOfRange(text.to_string())
            }
            _ => NumericError::InvalidNumber(text.to_string()),
        })
    }

    /// Parse the text as decimal.
    ///
    /// Uses the decimal separator of the filter's locale or the
    /// invariant `.`, like the filter does.
    pub fn value_f64(&self) -> Result<f64, NumericError> {
        let text = self.complete_text()?;
        parse_decimal(text, self.decimal_sep())
            .or_else(|| parse_decimal(text, INVARIANT_DECIMAL_SEP))
            .ok_or_else(|| NumericError::InvalidNumber(text.to_string()))
    }

    /// Set an integer value.
    pub fn set_value_i64(&mut self, value: i64) {
        self.widget.set_text(value.to_string());
    }

    /// Set a decimal value. Uses the decimal separator of the
    /// filter's locale.
    pub fn set_value_f64(&mut self, value: f64) {
        let text = value.to_string();
        let sep = self.decimal_sep();
        if sep != INVARIANT_DECIMAL_SEP {
            self.widget
                .set_text(text.replace(INVARIANT_DECIMAL_SEP, sep.encode_utf8(&mut [0u8; 4])));
        } else {
            self.widget.set_text(text);
        }
    }

    fn decimal_sep(&self) -> char {
        match &self.filter {
            Some(filter) => filter.rules().decimal_sep,
            None => decimal_separator(system_locale()),
        }
    }

    fn complete_text(&self) -> Result<&str, NumericError> {
        match self.widget.text() {
            "" => Err(NumericError::Empty),
            "-" | "+" => Err(NumericError::Incomplete),
            v => Ok(v),
        }
    }
}

impl NumericInputState {
    fn paste_payload(&self) -> Option<PastePayload> {
        let clip = self.widget.clipboard()?;
        match clip.get_string() {
            Ok(text) => Some(PastePayload::Text(text)),
            Err(_) => Some(PastePayload::NonText),
        }
    }

    fn insert_paste(&mut self, text: &str) -> TextOutcome {
        if self.widget.overwrite() {
            self.widget.set_overwrite(false);
            self.widget.clear();
        }
        if self.widget.insert_str(text) {
            TextOutcome::TextChanged
        } else {
            TextOutcome::Unchanged
        }
    }
}

impl HandleEvent<crossterm::event::Event, Regular, TextOutcome> for NumericInputState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: Regular) -> TextOutcome {
        let Some(filter) = &self.filter else {
            return self.widget.handle(event, Regular);
        };
        if !self.widget.is_focused() {
            return self.widget.handle(event, Regular);
        }

        let r = match event {
            ct_event!(key press ' ') => filter.on_key_press(&self.widget, KeyCode::Char(' ')),
            ct_event!(key press c)
            | ct_event!(key press SHIFT-c)
            | ct_event!(key press CONTROL_ALT-c) => filter.on_character_input(&self.widget, *c),
            // the text widget inserts a tab unless focus just arrived with it.
            ct_event!(keycode press Tab) if !self.widget.focus.gained() => {
                filter.on_character_input(&self.widget, '\t')
            }
            ct_event!(key press CONTROL-'v') => match self.paste_payload() {
                Some(payload) => filter.on_paste(&self.widget, &payload),
                None => FilterOutcome::Accept,
            },
            ct_event!(paste text) => {
                let payload = PastePayload::Text(text.clone());
                let r = filter.on_paste(&self.widget, &payload);
                return match r {
                    FilterOutcome::Accept => self.insert_paste(text),
                    FilterOutcome::Reject => TextOutcome::Unchanged,
                };
            }
            _ => FilterOutcome::Accept,
        };

        match r {
            FilterOutcome::Accept => self.widget.handle(event, Regular),
            FilterOutcome::Reject => TextOutcome::Unchanged,
        }
    }
}

impl HandleEvent<crossterm::event::Event, ReadOnly, TextOutcome> for NumericInputState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: ReadOnly) -> TextOutcome {
        self.widget.handle(event, ReadOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, TextOutcome> for NumericInputState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: MouseOnly) -> TextOutcome {
        self.widget.handle(event, MouseOnly)
    }
}

/// Handle all events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut NumericInputState,
    focus: bool,
    event: &crossterm::event::Event,
) -> TextOutcome {
    state.widget.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only navigation events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_readonly_events(
    state: &mut NumericInputState,
    focus: bool,
    event: &crossterm::event::Event,
) -> TextOutcome {
    state.widget.focus.set(focus);
    state.handle(event, ReadOnly)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut NumericInputState,
    event: &crossterm::event::Event,
) -> TextOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
