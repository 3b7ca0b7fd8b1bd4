use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    components::{Component, FormComponent},
    config::Config,
    pages::Page,
    tui::Event,
};

/// Entry page: hosts the registration form between a one-line header and a
/// one-line key-hint footer.
pub struct FormPage {
    form: FormComponent,
}

impl FormPage {
    pub fn new() -> Self {
        Self {
            form: FormComponent::new(),
        }
    }
}

impl Page for FormPage {
    fn name(&self) -> &str {
        "form"
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.form.register_action_handler(tx)
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.form.register_config_handler(config)
    }

    fn init(&mut self, area: Size) -> Result<()> {
        self.form.init(area)
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        self.form.handle_events(event)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.form.update(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("signup v{}", env!("CARGO_PKG_VERSION")),
                Style::default().add_modifier(Modifier::DIM),
            ))),
            header,
        );

        self.form.draw(frame, body)?;

        let hints = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::White)),
            Span::raw(": Next field  "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Submit  "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Clear  "),
            Span::styled("F2", Style::default().fg(Color::White)),
            Span::raw(": Show/hide password  "),
            Span::styled("Ctrl-q", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(hints), footer);

        Ok(())
    }
}
