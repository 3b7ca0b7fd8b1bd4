use std::collections::HashMap;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use enrollment::{ErrorMap, FieldId, FieldKind, Registration, validate};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;
use tui_prompts::{
    Prompt, State,
    prelude::{FocusState, TextPrompt, TextRenderStyle, TextState},
};

use super::Component;
use crate::{
    action::{Action, Route},
    app::Mode,
    config::Config,
};

/// The interactive registration form. Owns the in-flight record and the
/// error map, revalidates on every change and emits a single
/// `Navigate(Route::Details)` action once a valid record is submitted.
pub struct FormComponent {
    config: Config,
    record: Registration,
    errors: ErrorMap,
    show_password: bool,
    fields: Vec<FieldId>,
    focused: usize,
    scroll: usize,
    text_states: HashMap<FieldId, TextState<'static>>,
}

impl Default for FormComponent {
    fn default() -> Self {
        let fields: Vec<FieldId> = FieldId::iter().collect();
        let mut text_states = HashMap::new();
        for &field in &fields {
            if !matches!(field.kind(), FieldKind::Select { .. }) {
                text_states.insert(field, TextState::default());
            }
        }
        let record = Registration::default();
        let errors = validate(&record);
        let mut component = Self {
            config: Config::default(),
            record,
            errors,
            show_password: false,
            fields,
            focused: 0,
            scroll: 0,
            text_states,
        };
        component.apply_focus();
        component
    }
}

impl FormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply_focus(&mut self) {
        let focused_field = self.fields[self.focused];
        for (field, state) in self.text_states.iter_mut() {
            *state.focus_state_mut() = if *field == focused_field {
                FocusState::Focused
            } else {
                FocusState::Unfocused
            };
        }
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
        self.apply_focus();
    }

    fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = self.fields.len() - 1;
        } else {
            self.focused -= 1;
        }
        self.apply_focus();
    }

    fn sync_from_states(&mut self) {
        for (field, state) in self.text_states.iter() {
            self.record.set(*field, state.value());
        }
    }

    fn clear_inputs(&mut self) {
        self.record = Registration::default();
        for state in self.text_states.values_mut() {
            *state = TextState::default();
        }
        self.focused = 0;
        self.scroll = 0;
        self.apply_focus();
        self.errors = validate(&self.record);
    }

    fn cycle_select(&mut self, field: FieldId, options: &'static [&'static str], dir: i32) {
        let current = self.record.get(field);
        let idx = options.iter().position(|o| *o == current).unwrap_or(0) as i32;
        let len = options.len() as i32;
        let next = (idx + dir).rem_euclid(len) as usize;
        self.record.set(field, options[next]);
        self.errors = validate(&self.record);
    }

    /// Re-validates before navigating so stale errors cannot let an invalid
    /// record through. A valid record produces exactly one navigation action
    /// carrying a copy of the record.
    fn submit(&mut self) -> Option<Action> {
        self.errors = validate(&self.record);
        if !self.errors.is_empty() {
            return None;
        }
        Some(Action::Navigate(Route::Details {
            form_data: self.record.clone(),
        }))
    }

    fn style(&self, key: &str) -> Style {
        self.config
            .styles
            .get(&Mode::Form)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }

    fn visible_count(height: u16) -> usize {
        // Two rows per field: the input line and the error line under it.
        ((height / 2).max(1)) as usize
    }

    fn ensure_visible(&mut self, height: u16) {
        let max_visible = Self::visible_count(height);
        if self.focused < self.scroll {
            self.scroll = self.focused;
        } else if self.focused >= self.scroll + max_visible {
            self.scroll = self.focused + 1 - max_visible;
        }
    }

    fn visible_bounds(&self, height: u16) -> (usize, usize) {
        let max_visible = Self::visible_count(height);
        let start = self.scroll.min(self.fields.len().saturating_sub(1));
        let end = (start + max_visible).min(self.fields.len());
        (start, end)
    }
}

/// Thumb row for a one-column scroll track, `None` when everything fits.
fn scrollbar_thumb(total: usize, visible: usize, scroll: usize, track_height: u16) -> Option<usize> {
    if track_height == 0 || total == 0 || visible == 0 || total <= visible {
        return None;
    }
    let max_thumb_y = track_height.saturating_sub(1) as usize;
    let denom = total.saturating_sub(visible).max(1);
    let ratio = (scroll as f32) / (denom as f32);
    let thumb_y = (ratio * (max_thumb_y as f32)).round() as usize;
    Some(thumb_y.min(max_thumb_y))
}

impl Component for FormComponent {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Keys bound at the page level (quit, suspend, password toggle) must
        // reach the app dispatcher, so they are not consumed here.
        if let Some(bindings) = self.config.keybindings.get(&Mode::Form) {
            if bindings.contains_key(&vec![key]) {
                return Ok(None);
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Ok(None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Ok(None)
            }
            KeyCode::Enter => {
                self.sync_from_states();
                Ok(self.submit())
            }
            KeyCode::Esc => {
                self.clear_inputs();
                Ok(None)
            }
            _ => {
                let field = self.fields[self.focused];
                match field.kind() {
                    FieldKind::Select { options } => {
                        match key.code {
                            KeyCode::Left => self.cycle_select(field, options, -1),
                            KeyCode::Right | KeyCode::Char(' ') => {
                                self.cycle_select(field, options, 1)
                            }
                            _ => {}
                        }
                        Ok(None)
                    }
                    _ => {
                        if let Some(state) = self.text_states.get_mut(&field) {
                            state.handle_key_event(key);
                        }
                        self.sync_from_states();
                        self.errors = validate(&self.record);
                        Ok(None)
                    }
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::TogglePassword {
            self.show_password = !self.show_password;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [heading, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let status = if self.errors.is_empty() {
            Span::styled("All fields valid. Press Enter to submit.", self.style("ready"))
        } else {
            Span::styled(
                format!(
                    "{} of {} fields still invalid",
                    self.errors.len(),
                    self.fields.len()
                ),
                self.style("error"),
            )
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Registration",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(status),
            ]),
            heading,
        );

        let track_needed = self.fields.len() > Self::visible_count(body.height);
        let inner = if track_needed {
            Rect {
                width: body.width.saturating_sub(2),
                ..body
            }
        } else {
            body
        };

        self.ensure_visible(inner.height);
        let (start, end) = self.visible_bounds(inner.height);

        let placeholder_style = self.style("placeholder");
        let error_style = self.style("error");
        let focused_style = self.style("focused");
        let show_password = self.show_password;
        let focused_idx = self.focused;

        for (offset, &field) in self.fields[start..end].iter().enumerate() {
            let y = inner.y + (offset as u16) * 2;
            if y >= inner.y + inner.height {
                break;
            }
            let input_row = Rect::new(inner.x, y, inner.width, 1);
            let is_focused = start + offset == focused_idx;

            match field.kind() {
                FieldKind::Text => {
                    if let Some(state) = self.text_states.get_mut(&field) {
                        TextPrompt::from(field.label()).draw(frame, input_row, state);
                    }
                }
                FieldKind::Secret => {
                    let render_style = if show_password {
                        TextRenderStyle::Default
                    } else {
                        TextRenderStyle::Password
                    };
                    if let Some(state) = self.text_states.get_mut(&field) {
                        TextPrompt::from(field.label())
                            .with_render_style(render_style)
                            .draw(frame, input_row, state);
                    }
                }
                FieldKind::Select { .. } => {
                    let value = self.record.get(field);
                    let label_style = if is_focused {
                        focused_style
                    } else {
                        Style::default()
                    };
                    let mut spans =
                        vec![Span::styled(format!("{}: ", field.label()), label_style)];
                    if value.is_empty() {
                        spans.push(Span::styled(
                            field.placeholder().unwrap_or(""),
                            placeholder_style,
                        ));
                    } else {
                        spans.push(Span::raw(value.to_string()));
                    }
                    if is_focused {
                        spans.push(Span::styled("  Left/Right to change", placeholder_style));
                    }
                    frame.render_widget(Paragraph::new(Line::from(spans)), input_row);
                }
            }

            if y + 1 < inner.y + inner.height {
                if let Some(message) = self.errors.get(&field) {
                    let error_row = Rect::new(inner.x, y + 1, inner.width, 1);
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            format!("  {message}"),
                            error_style,
                        ))),
                        error_row,
                    );
                }
            }
        }

        if track_needed {
            let track = Rect {
                x: body.x + body.width.saturating_sub(1),
                y: body.y,
                width: 1,
                height: body.height,
            };
            let visible = Self::visible_count(inner.height);
            if let Some(thumb) = scrollbar_thumb(self.fields.len(), visible, self.scroll, track.height)
            {
                let mut lines = Vec::with_capacity(track.height as usize);
                for i in 0..track.height {
                    lines.push(if i as usize == thumb {
                        Line::from(Span::styled("█", Style::default().fg(Color::Gray)))
                    } else {
                        Line::from(Span::styled("│", Style::default().fg(Color::DarkGray)))
                    });
                }
                frame.render_widget(Paragraph::new(lines), track);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn press(form: &mut FormComponent, code: KeyCode) -> Option<Action> {
        form.handle_key_event(key(code)).unwrap()
    }

    fn type_str(form: &mut FormComponent, text: &str) {
        for ch in text.chars() {
            press(form, KeyCode::Char(ch));
        }
    }

    /// Walk the form top to bottom, typing text values and cycling selects.
    fn fill(form: &mut FormComponent, email: &str) {
        for field in FieldId::iter() {
            match field {
                FieldId::FirstName => type_str(form, "Asha"),
                FieldId::LastName => type_str(form, "Verma"),
                FieldId::Username => type_str(form, "asha.v"),
                FieldId::Email => type_str(form, email),
                FieldId::Password => type_str(form, "hunter2!"),
                FieldId::PhoneNo => type_str(form, "91-9876543210"),
                FieldId::Country => {
                    // empty -> India
                    press(form, KeyCode::Right);
                }
                FieldId::City => {
                    // empty -> New York -> London -> Delhi
                    for _ in 0..3 {
                        press(form, KeyCode::Right);
                    }
                }
                FieldId::PanNo => type_str(form, "ABCDE1234F"),
                FieldId::AadharNo => type_str(form, "1234567890123456"),
            }
            press(form, KeyCode::Tab);
        }
    }

    #[test]
    fn empty_form_starts_with_all_required_errors() {
        let form = FormComponent::new();
        assert_eq!(form.errors.len(), 10);
    }

    #[test]
    fn typing_revalidates_live() {
        let mut form = FormComponent::new();
        type_str(&mut form, "A");
        assert!(!form.errors.contains_key(&FieldId::FirstName));
        assert_eq!(form.errors.len(), 9);
    }

    #[test]
    fn valid_submit_produces_one_navigation_with_the_record() {
        let mut form = FormComponent::new();
        fill(&mut form, "asha@example.com");
        assert!(form.errors.is_empty());
        let action = press(&mut form, KeyCode::Enter);
        match action {
            Some(Action::Navigate(Route::Details { form_data })) => {
                assert_eq!(form_data.first_name, "Asha");
                assert_eq!(form_data.email, "asha@example.com");
                assert_eq!(form_data.country, "India");
                assert_eq!(form_data.city, "Delhi");
                assert_eq!(form_data.aadhar_no, "1234567890123456");
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn invalid_field_blocks_navigation() {
        let mut form = FormComponent::new();
        fill(&mut form, "not-an-email");
        let action = press(&mut form, KeyCode::Enter);
        assert_eq!(action, None);
        assert_eq!(
            form.errors[&FieldId::Email],
            "Email must be a valid email address"
        );
    }

    #[test]
    fn select_cycles_wrap_in_both_directions() {
        let mut form = FormComponent::new();
        while form.fields[form.focused] != FieldId::Country {
            press(&mut form, KeyCode::Tab);
        }
        press(&mut form, KeyCode::Left);
        assert_eq!(form.record.get(FieldId::Country), "UK");
        press(&mut form, KeyCode::Right);
        assert_eq!(form.record.get(FieldId::Country), "");
    }

    #[test]
    fn toggle_password_only_affects_display() {
        let mut form = FormComponent::new();
        let errors_before = form.errors.clone();
        form.update(Action::TogglePassword).unwrap();
        assert!(form.show_password);
        assert_eq!(form.errors, errors_before);
    }

    #[test]
    fn esc_clears_the_form() {
        let mut form = FormComponent::new();
        type_str(&mut form, "Asha");
        assert_eq!(form.record.get(FieldId::FirstName), "Asha");
        press(&mut form, KeyCode::Esc);
        assert_eq!(form.record, Registration::default());
        assert_eq!(form.errors.len(), 10);
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn scrollbar_thumb_tracks_scroll_position() {
        assert_eq!(scrollbar_thumb(10, 4, 0, 8), Some(0));
        assert_eq!(scrollbar_thumb(10, 4, 6, 8), Some(7));
        assert_eq!(scrollbar_thumb(4, 10, 0, 8), None);
    }
}
