use color_eyre::Result;
use enrollment::Registration;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    components::{Component, DetailsComponent},
    config::Config,
    pages::Page,
    tui::Event,
};

/// Confirmation page. Constructed from the submitted record, so it can never
/// be shown without data to display.
pub struct DetailsPage {
    details: DetailsComponent,
}

impl DetailsPage {
    pub fn new(record: Registration) -> Self {
        Self {
            details: DetailsComponent::new(record),
        }
    }
}

impl Page for DetailsPage {
    fn name(&self) -> &str {
        "details"
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.details.register_action_handler(tx)
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.details.register_config_handler(config)
    }

    fn init(&mut self, area: Size) -> Result<()> {
        self.details.init(area)
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        self.details.handle_events(event)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.details.update(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        self.details.draw(frame, body)?;

        let hints = Line::from(vec![
            Span::styled("q", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(hints), footer);

        Ok(())
    }
}
