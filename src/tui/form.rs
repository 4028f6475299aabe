//! The entry form screen
//!
//! One full-screen form over the shared draft: three text inputs, two
//! Left/Right selectors, a category dropdown, and a checkbox that only
//! exists while the category is food. Key handling returns a [`FormAction`]
//! for the router; the form itself never talks to the network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::form::{EntryDraft, EntryType, Field, PaymentMethod, ValidationErrors};

use super::app::App;
use super::layout::{form_area, notification_area};
use super::widgets::input::TextInput;
use super::widgets::notification::NotificationWidget;

/// What the router should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Reset,
    Quit,
}

/// State for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// The entry being put together
    pub draft: EntryDraft,

    /// Currently focused field
    pub focused_field: Field,

    /// Date input
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Highlight index in the category dropdown
    pub category_list_index: usize,

    /// Whether the category dropdown is open
    pub show_category_dropdown: bool,

    /// Messages from the last validation pass
    pub errors: ValidationErrors,

    /// The amount input held text that does not parse as a number
    amount_invalid: bool,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a new form state: today's date, everything else unset
    pub fn new() -> Self {
        let draft = EntryDraft::new();
        let mut state = Self {
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(draft.date.clone()),
            description_input: TextInput::new().placeholder("(optional note)"),
            amount_input: TextInput::new().placeholder("(yen)"),
            draft,
            focused_field: Field::Date,
            category_list_index: 0,
            show_category_dropdown: false,
            errors: ValidationErrors::new(),
            amount_invalid: false,
        };
        state.update_focus();
        state
    }

    /// Restore the form to its initial empty state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.field_after(self.focused_field);
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.field_before(self.focused_field);
        self.update_focus();
    }

    fn field_after(&self, field: Field) -> Field {
        let next = match field {
            Field::Date => Field::Type,
            Field::Type => Field::Category,
            Field::Category => Field::Description,
            Field::Description => Field::Amount,
            Field::Amount => Field::PaymentMethod,
            Field::PaymentMethod => Field::EatingOut,
            Field::EatingOut => Field::Date,
        };
        if next == Field::EatingOut && !self.draft.eating_out_applicable() {
            Field::Date
        } else {
            next
        }
    }

    fn field_before(&self, field: Field) -> Field {
        let prev = match field {
            Field::Date => Field::EatingOut,
            Field::Type => Field::Date,
            Field::Category => Field::Type,
            Field::Description => Field::Category,
            Field::Amount => Field::Description,
            Field::PaymentMethod => Field::Amount,
            Field::EatingOut => Field::PaymentMethod,
        };
        if prev == Field::EatingOut && !self.draft.eating_out_applicable() {
            Field::PaymentMethod
        } else {
            prev
        }
    }

    /// Update which input has focus
    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == Field::Date;
        self.description_input.focused = self.focused_field == Field::Description;
        self.amount_input.focused = self.focused_field == Field::Amount;

        // The dropdown follows category focus; highlight the current pick
        self.show_category_dropdown = self.focused_field == Field::Category;
        if self.show_category_dropdown {
            self.category_list_index = self
                .draft
                .categories()
                .iter()
                .position(|c| *c == self.draft.category)
                .unwrap_or(0);
        }
    }

    /// The text input under the cursor, if the focused field is one
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            Field::Date => Some(&mut self.date_input),
            Field::Description => Some(&mut self.description_input),
            Field::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }

    fn accepts_char(field: Field, c: char) -> bool {
        match field {
            Field::Date => c.is_ascii_digit() || c == '-',
            Field::Amount => c.is_ascii_digit() || c == '.',
            Field::Description => true,
            _ => false,
        }
    }

    fn cycle_entry_type(&mut self, forward: bool) {
        let all = EntryType::all();
        let position = self
            .draft
            .entry_type
            .and_then(|t| all.iter().position(|x| *x == t));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => all.len() - 1,
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
        };
        self.draft.set_entry_type(all[next]);
        self.category_list_index = self
            .draft
            .categories()
            .iter()
            .position(|c| *c == self.draft.category)
            .unwrap_or(0);
    }

    fn cycle_payment_method(&mut self, forward: bool) {
        let all = PaymentMethod::all();
        let position = self
            .draft
            .payment_method
            .and_then(|m| all.iter().position(|x| *x == m));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => all.len() - 1,
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
        };
        self.draft.payment_method = Some(all[next]);
    }

    /// Pick the highlighted category and move on
    fn select_category_from_dropdown(&mut self) {
        let options = self.draft.categories();
        if options.is_empty() {
            return;
        }
        let idx = self.category_list_index.min(options.len() - 1);
        self.draft.set_category(options[idx]);
        self.next_field();
    }

    /// Copy the text inputs into the draft
    fn sync_draft(&mut self) {
        self.draft.date = self.date_input.value().trim().to_string();
        self.draft.description = self.description_input.value().to_string();

        let amount_text = self.amount_input.value().trim().to_string();
        if amount_text.is_empty() {
            self.draft.amount = None;
            self.amount_invalid = false;
        } else {
            match amount_text.parse::<f64>() {
                Ok(value) => {
                    self.draft.amount = Some(value);
                    self.amount_invalid = false;
                }
                Err(_) => {
                    self.draft.amount = None;
                    self.amount_invalid = true;
                }
            }
        }
    }

    /// Run a full validation pass over the draft, recording per-field
    /// messages. Returns true when the entry is ready to submit.
    pub fn validate(&mut self) -> bool {
        self.sync_draft();
        let mut errors = crate::form::validate(&self.draft);
        if self.amount_invalid {
            errors.insert(Field::Amount, "Amount must be a number");
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Handle a key event, returning an action for the router to apply
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Quit,

            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return FormAction::Reset;
            }

            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_field();
                } else {
                    self.next_field();
                }
            }

            KeyCode::BackTab => self.prev_field(),

            KeyCode::Enter => {
                // Enter in the category row picks from the dropdown;
                // anywhere else it submits the form
                if self.focused_field == Field::Category {
                    self.select_category_from_dropdown();
                } else {
                    return FormAction::Submit;
                }
            }

            KeyCode::Up => {
                if self.focused_field == Field::Category {
                    self.category_list_index = self.category_list_index.saturating_sub(1);
                }
            }

            KeyCode::Down => {
                if self.focused_field == Field::Category {
                    let max = self.draft.categories().len().saturating_sub(1);
                    self.category_list_index = (self.category_list_index + 1).min(max);
                }
            }

            KeyCode::Left => match self.focused_field {
                Field::Type => self.cycle_entry_type(false),
                Field::PaymentMethod => self.cycle_payment_method(false),
                _ => {
                    if let Some(input) = self.focused_input() {
                        input.move_left();
                    }
                }
            },

            KeyCode::Right => match self.focused_field {
                Field::Type => self.cycle_entry_type(true),
                Field::PaymentMethod => self.cycle_payment_method(true),
                _ => {
                    if let Some(input) = self.focused_input() {
                        input.move_right();
                    }
                }
            },

            KeyCode::Home => {
                if let Some(input) = self.focused_input() {
                    input.move_start();
                }
            }

            KeyCode::End => {
                if let Some(input) = self.focused_input() {
                    input.move_end();
                }
            }

            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.backspace();
                }
            }

            KeyCode::Delete => {
                if let Some(input) = self.focused_input() {
                    input.delete();
                }
            }

            KeyCode::Char(' ') if self.focused_field == Field::EatingOut => {
                let current = self.draft.eating_out;
                self.draft.set_eating_out(!current);
            }

            KeyCode::Char(c) => {
                if Self::accepts_char(self.focused_field, c) {
                    if let Some(input) = self.focused_input() {
                        input.insert(c);
                    }
                }
            }

            _ => {}
        }

        FormAction::None
    }
}

const LABEL_WIDTH: u16 = 16;
const ERROR_WIDTH: u16 = 27;

/// Render the whole screen: form box, hints, and any toast
pub fn render(frame: &mut Frame, app: &App) {
    let area = form_area(frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Entry ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(6), // Category dropdown
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Payment method
            Constraint::Length(1), // Eating out
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let form = &app.form;

    render_text_row(frame, rows[0], "Date", &form.date_input, form.errors.get(Field::Date));
    render_selector_row(
        frame,
        rows[1],
        "Type",
        form.draft.entry_type.map(|t| t.to_string()),
        form.focused_field == Field::Type,
        form.errors.get(Field::Type),
    );
    render_category_row(frame, rows[2], rows[3], form);
    render_text_row(
        frame,
        rows[4],
        "Description",
        &form.description_input,
        form.errors.get(Field::Description),
    );
    render_text_row(frame, rows[5], "Amount", &form.amount_input, form.errors.get(Field::Amount));
    render_selector_row(
        frame,
        rows[6],
        "Payment method",
        form.draft.payment_method.map(|m| m.to_string()),
        form.focused_field == Field::PaymentMethod,
        form.errors.get(Field::PaymentMethod),
    );
    render_eating_out_row(frame, rows[7], form);
    render_hints(frame, rows[9], app.submitting);

    if let Some(notification) = app.notifications.current() {
        let toast_area = notification_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), toast_area);
    }
}

/// Split a field row into label, value and error columns
fn split_row(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Min(16),
            Constraint::Length(ERROR_WIDTH),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{:>14}: ", label), style)),
        area,
    );
}

fn render_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            ))),
            area,
        );
    }
}

fn render_text_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    error: Option<&str>,
) {
    let (label_area, value_area, error_area) = split_row(area);
    render_label(frame, label_area, label, input.focused);
    frame.render_widget(input.clone(), value_area);
    render_field_error(frame, error_area, error);
}

fn render_selector_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<String>,
    focused: bool,
    error: Option<&str>,
) {
    let (label_area, value_area, error_area) = split_row(area);
    render_label(frame, label_area, label, focused);

    let text = match &value {
        Some(v) if focused => format!("< {} >", v),
        Some(v) => v.clone(),
        None if focused => "< (select) >".to_string(),
        None => "(select)".to_string(),
    };
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), value_area);
    render_field_error(frame, error_area, error);
}

fn render_category_row(
    frame: &mut Frame,
    input_area: Rect,
    dropdown_area: Rect,
    form: &EntryFormState,
) {
    let focused = form.focused_field == Field::Category;
    let (label_area, value_area, error_area) = split_row(input_area);
    render_label(frame, label_area, "Category", focused);

    let text = if form.draft.category.is_empty() {
        "(select)".to_string()
    } else {
        form.draft.category.clone()
    };
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), value_area);
    render_field_error(frame, error_area, form.errors.get(Field::Category));

    if form.show_category_dropdown {
        render_category_dropdown(frame, dropdown_area, form);
    }
}

fn render_category_dropdown(frame: &mut Frame, area: Rect, form: &EntryFormState) {
    let options = form.draft.categories();
    if options.is_empty() {
        let hint = Paragraph::new("  Select a type first").style(Style::default().fg(Color::Yellow));
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|name| {
            ListItem::new(Line::from(Span::styled(
                format!("  {}", name),
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(form.category_list_index.min(options.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_eating_out_row(frame: &mut Frame, area: Rect, form: &EntryFormState) {
    if !form.draft.eating_out_applicable() {
        return;
    }

    let focused = form.focused_field == Field::EatingOut;
    let (label_area, value_area, _error_area) = split_row(area);
    render_label(frame, label_area, "Eating out", focused);

    let marker = if form.draft.eating_out { "[x]" } else { "[ ]" };
    let text = if focused {
        format!("{} (Space toggles)", marker)
    } else {
        marker.to_string()
    };
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), value_area);
}

fn render_hints(frame: &mut Frame, area: Rect, submitting: bool) {
    let submit_style = if submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };
    let submit_label = if submitting {
        " Submitting...  "
    } else {
        " Submit  "
    };

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", submit_style),
        Span::styled(submit_label, submit_style),
        Span::styled("[Ctrl+R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::form::FOOD;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut EntryFormState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    /// Empty the focused text input.
    fn clear_focused_text(state: &mut EntryFormState) {
        state.handle_key(press(KeyCode::End));
        for _ in 0..32 {
            state.handle_key(press(KeyCode::Backspace));
        }
    }

    /// Fill a submittable food expense: 2024-05-01, 1500 yen cash lunch,
    /// eating out. Leaves focus on the checkbox.
    fn fill_food_expense(state: &mut EntryFormState) {
        clear_focused_text(state);
        type_string(state, "2024-05-01");

        state.handle_key(press(KeyCode::Tab)); // -> Type
        state.handle_key(press(KeyCode::Right)); // Income
        state.handle_key(press(KeyCode::Right)); // Expense

        state.handle_key(press(KeyCode::Tab)); // -> Category
        state.handle_key(press(KeyCode::Enter)); // food (first), -> Description

        type_string(state, "lunch");

        state.handle_key(press(KeyCode::Tab)); // -> Amount
        type_string(state, "1500");

        state.handle_key(press(KeyCode::Tab)); // -> Payment method
        state.handle_key(press(KeyCode::Right)); // Cash

        state.handle_key(press(KeyCode::Tab)); // -> Eating out
        state.handle_key(press(KeyCode::Char(' '))); // toggle on
    }

    mod focus_navigation {
        use super::*;

        #[test]
        fn initial_focus_is_date_with_today_prefilled() {
            let state = EntryFormState::new();
            assert_eq!(state.focused_field, Field::Date);
            assert_eq!(state.date_input.value(), state.draft.date);
            assert!(!state.date_input.value().is_empty());
        }

        #[test]
        fn tab_skips_checkbox_while_category_is_not_food() {
            let mut state = EntryFormState::new();
            let expected = [
                Field::Type,
                Field::Category,
                Field::Description,
                Field::Amount,
                Field::PaymentMethod,
                Field::Date, // checkbox skipped
            ];
            for field in expected {
                state.handle_key(press(KeyCode::Tab));
                assert_eq!(state.focused_field, field);
            }
        }

        #[test]
        fn checkbox_joins_the_cycle_for_food() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);
            assert_eq!(state.focused_field, Field::EatingOut);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focused_field, Field::Date);
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focused_field, Field::EatingOut);
        }

        #[test]
        fn back_tab_wraps_past_hidden_checkbox() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focused_field, Field::PaymentMethod);
        }

        #[test]
        fn focusing_category_opens_the_dropdown() {
            let mut state = EntryFormState::new();
            assert!(!state.show_category_dropdown);
            state.handle_key(press(KeyCode::Tab)); // Type
            state.handle_key(press(KeyCode::Tab)); // Category
            assert!(state.show_category_dropdown);
            state.handle_key(press(KeyCode::Tab)); // Description
            assert!(!state.show_category_dropdown);
        }
    }

    mod type_selection {
        use super::*;

        #[test]
        fn right_selects_the_first_type() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab)); // -> Type
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.draft.entry_type, Some(EntryType::Income));
        }

        #[test]
        fn right_cycles_through_all_types() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab));
            let expected = [
                EntryType::Income,
                EntryType::Expense,
                EntryType::TopUp,
                EntryType::Deposit,
                EntryType::Income,
            ];
            for entry_type in expected {
                state.handle_key(press(KeyCode::Right));
                assert_eq!(state.draft.entry_type, Some(entry_type));
            }
        }

        #[test]
        fn left_from_unset_wraps_to_deposit() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Left));
            assert_eq!(state.draft.entry_type, Some(EntryType::Deposit));
        }

        #[test]
        fn type_switch_drops_a_foreign_category() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);

            // Back to the type selector and over to income
            for _ in 0..2 {
                state.handle_key(press(KeyCode::Tab)); // -> Date -> Type
            }
            assert_eq!(state.focused_field, Field::Type);
            state.handle_key(press(KeyCode::Right)); // Expense -> TopUp
            assert!(state.draft.category.is_empty());
            assert!(!state.draft.eating_out);
        }

        #[test]
        fn wallet_survives_topup_deposit_switch() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab)); // Type
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right)); // TopUp
            state.handle_key(press(KeyCode::Tab)); // Category
            state.handle_key(press(KeyCode::Enter)); // wallet

            state.handle_key(press(KeyCode::BackTab)); // back to Category
            state.handle_key(press(KeyCode::BackTab)); // back to Type
            state.handle_key(press(KeyCode::Right)); // TopUp -> Deposit
            assert_eq!(state.draft.category, "wallet");
        }
    }

    mod category_dropdown {
        use super::*;

        #[test]
        fn down_moves_highlight_and_enter_selects() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab)); // Type
            state.handle_key(press(KeyCode::Right)); // Income
            state.handle_key(press(KeyCode::Right)); // Expense
            state.handle_key(press(KeyCode::Tab)); // Category

            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter));

            assert_eq!(state.draft.category, "daily-goods");
            assert_eq!(state.focused_field, Field::Description);
        }

        #[test]
        fn enter_without_a_type_selects_nothing() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab)); // Type (left unset)
            state.handle_key(press(KeyCode::Tab)); // Category
            state.handle_key(press(KeyCode::Enter));

            assert!(state.draft.category.is_empty());
            assert_eq!(state.focused_field, Field::Category);
        }

        #[test]
        fn highlight_clamps_at_both_ends() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Right)); // Income: 4 options
            state.handle_key(press(KeyCode::Tab));

            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.category_list_index, 0);
            for _ in 0..10 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.category_list_index, 3);
        }

        #[test]
        fn reopening_highlights_current_selection() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right)); // Expense
            state.handle_key(press(KeyCode::Tab)); // Category
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter)); // misc

            state.handle_key(press(KeyCode::BackTab)); // back to Category
            assert_eq!(state.category_list_index, 1);
        }
    }

    mod eating_out {
        use super::*;

        #[test]
        fn space_toggles_for_food() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);
            assert!(state.draft.eating_out);
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(!state.draft.eating_out);
        }

        #[test]
        fn leaving_food_clears_the_flag() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);

            // Back to Category and pick something else
            state.handle_key(press(KeyCode::BackTab)); // Payment method
            state.handle_key(press(KeyCode::BackTab)); // Amount
            state.handle_key(press(KeyCode::BackTab)); // Description
            state.handle_key(press(KeyCode::BackTab)); // Category
            state.handle_key(press(KeyCode::Down)); // misc
            state.handle_key(press(KeyCode::Enter));

            assert_eq!(state.draft.category, "misc");
            assert!(!state.draft.eating_out);
            assert!(!state.draft.eating_out_applicable());
        }
    }

    mod text_editing {
        use super::*;

        #[test]
        fn date_input_accepts_digits_and_dashes_only() {
            let mut state = EntryFormState::new();
            clear_focused_text(&mut state);
            type_string(&mut state, "2x024-y05");
            assert_eq!(state.date_input.value(), "2024-05");
        }

        #[test]
        fn amount_input_accepts_digits_and_dot_only() {
            let mut state = EntryFormState::new();
            for _ in 0..4 {
                state.handle_key(press(KeyCode::Tab)); // -> Amount
            }
            assert_eq!(state.focused_field, Field::Amount);
            type_string(&mut state, "1,2a3.5");
            assert_eq!(state.amount_input.value(), "123.5");
        }

        #[test]
        fn description_accepts_anything() {
            let mut state = EntryFormState::new();
            for _ in 0..3 {
                state.handle_key(press(KeyCode::Tab)); // -> Description
            }
            type_string(&mut state, "昼食 cafe & more");
            assert_eq!(state.description_input.value(), "昼食 cafe & more");
        }

        #[test]
        fn arrows_move_the_cursor_in_text_fields() {
            let mut state = EntryFormState::new();
            for _ in 0..3 {
                state.handle_key(press(KeyCode::Tab));
            }
            type_string(&mut state, "ac");
            state.handle_key(press(KeyCode::Left));
            type_string(&mut state, "b");
            assert_eq!(state.description_input.value(), "abc");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn empty_form_reports_every_missing_field_at_once() {
            let mut state = EntryFormState::new();
            clear_focused_text(&mut state);

            assert!(!state.validate());
            assert_eq!(state.errors.len(), 5);
            assert!(state.errors.get(Field::Date).is_some());
            assert!(state.errors.get(Field::Type).is_some());
            assert!(state.errors.get(Field::Category).is_some());
            assert!(state.errors.get(Field::Amount).is_some());
            assert!(state.errors.get(Field::PaymentMethod).is_some());
        }

        #[test]
        fn unparseable_amount_reports_under_amount() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);

            // Corrupt the amount
            state.handle_key(press(KeyCode::BackTab)); // Payment method
            state.handle_key(press(KeyCode::BackTab)); // Amount
            type_string(&mut state, ".5.");

            assert!(!state.validate());
            assert_eq!(state.errors.get(Field::Amount), Some("Amount must be a number"));
        }

        #[test]
        fn filled_form_validates_clean() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);

            assert!(state.validate());
            assert!(state.errors.is_empty());
            assert_eq!(state.draft.date, "2024-05-01");
            assert_eq!(state.draft.entry_type, Some(EntryType::Expense));
            assert_eq!(state.draft.category, FOOD);
            assert_eq!(state.draft.description, "lunch");
            assert_eq!(state.draft.amount, Some(1500.0));
            assert_eq!(state.draft.payment_method, Some(PaymentMethod::Cash));
            assert!(state.draft.eating_out);
        }

        #[test]
        fn errors_stay_until_the_next_validation_pass() {
            let mut state = EntryFormState::new();
            clear_focused_text(&mut state);
            state.validate();
            assert!(!state.errors.is_empty());

            // Editing does not clear messages
            type_string(&mut state, "2024-05-01");
            assert!(!state.errors.is_empty());

            fill_food_expense(&mut state);
            assert!(state.validate());
            assert!(state.errors.is_empty());
        }
    }

    mod actions {
        use super::*;

        #[test]
        fn enter_outside_the_category_row_submits() {
            let mut state = EntryFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::Enter)), FormAction::Submit);
        }

        #[test]
        fn enter_on_the_category_row_does_not_submit() {
            let mut state = EntryFormState::new();
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.handle_key(press(KeyCode::Enter)), FormAction::None);
        }

        #[test]
        fn esc_quits_and_ctrl_r_resets() {
            let mut state = EntryFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), FormAction::Quit);
            assert_eq!(
                state.handle_key(ctrl_press(KeyCode::Char('r'))),
                FormAction::Reset
            );
        }

        #[test]
        fn reset_restores_defaults() {
            let mut state = EntryFormState::new();
            fill_food_expense(&mut state);
            state.reset();

            assert_eq!(state.focused_field, Field::Date);
            assert_eq!(state.draft, EntryDraft::new());
            assert!(state.description_input.value().is_empty());
            assert!(state.amount_input.value().is_empty());
            assert!(state.errors.is_empty());
        }
    }
}
