//!
//! Three numeric inputs.
//!
//! Tab/BackTab switch between the fields, Alt-d detaches/attaches the
//! filter of the current field, Esc quits.
//!

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::debug;
use rat_event::{ct_event, HandleEvent, Outcome, Regular};
use rat_focus::{Focus, FocusBuilder, HasFocus};
use rat_numeric::event::TextOutcome;
use rat_numeric::filter::NumericFilter;
use rat_numeric::numeric_input::{NumericInput, NumericInputState};
use rat_text::HasScreenCursor;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use ratatui::{Frame, Terminal};
use std::cmp::max;
use std::fs;
use std::io::stdout;
use std::path::PathBuf;

struct State {
    fields: [NumericInputState; 3],
    detached: [Option<NumericFilter>; 3],
    status: String,
    quit: bool,
}

const LABELS: [&str; 3] = ["Decimal", "Positive decimal", "Positive integer"];

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        fields: [
            NumericInputState::named("decimal"),
            NumericInputState::with_filter(NumericFilter::new().only_positive(true)),
            NumericInputState::with_filter(
                NumericFilter::new().only_positive(true).only_integer(true),
            ),
        ],
        detached: [None, None, None],
        status: String::new(),
        quit: false,
    };
    focus(&state).first();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    stdout().execute(SetCursorStyle::BlinkingBar)?;

    let r = run(&mut state);

    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(SetCursorStyle::DefaultUserShape)?;
    stdout().execute(LeaveAlternateScreen)?;

    r
}

fn run(state: &mut State) -> Result<(), anyhow::Error> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    while !state.quit {
        terminal.draw(|frame| render(frame, state))?;
        let event = crossterm::event::read()?;
        let r = handle(&event, state);
        debug!("event {:?}", r);
    }
    Ok(())
}

fn render(frame: &mut Frame<'_>, state: &mut State) {
    let l = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    for (i, field) in state.fields.iter_mut().enumerate() {
        let title = if field.is_attached() {
            LABELS[i].to_string()
        } else {
            format!("{} (detached)", LABELS[i])
        };
        NumericInput::new()
            .block(Block::bordered().title(title))
            .style(Style::new().white().on_dark_gray())
            .focus_style(Style::new().black().on_cyan())
            .select_style(Style::new().black().on_yellow())
            .render(l[i], frame.buffer_mut(), field);
    }

    if let Some(cursor) = state.fields.iter().find_map(|v| v.screen_cursor()) {
        frame.set_cursor_position(cursor);
    }

    Line::from(state.status.as_str()).render(l[4], frame.buffer_mut());
}

fn focus(state: &State) -> Focus {
    let mut builder = FocusBuilder::new(None);
    for field in &state.fields {
        builder.widget(field);
    }
    builder.build()
}

fn handle(event: &Event, state: &mut State) -> Outcome {
    match event {
        ct_event!(keycode press Esc) => {
            state.quit = true;
            return Outcome::Changed;
        }
        ct_event!(key press ALT-'d') => {
            let Some(idx) = state.fields.iter().position(|v| v.is_focused()) else {
                return Outcome::Continue;
            };
            let field = &mut state.fields[idx];
            if let Some(filter) = field.detach() {
                state.detached[idx] = Some(filter);
                state.status = "filter detached".into();
            } else {
                let filter = state.detached[idx].take().unwrap_or_default();
                field.attach(filter);
                // text may be anything by now.
                field.clear();
                state.status = "filter attached".into();
            }
            return Outcome::Changed;
        }
        _ => {}
    }

    let mut focus = focus(state);
    let f = focus.handle(event, Regular);

    for field in state.fields.iter_mut() {
        match field.handle(event, Regular) {
            TextOutcome::Continue => {}
            TextOutcome::TextChanged => {
                state.status = match field.value_f64() {
                    Ok(v) => format!("value {}", v),
                    Err(e) => format!("{}", e),
                };
                return Outcome::Changed;
            }
            r => return max(f, r.into()),
        }
    }
    f
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("numeric.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
