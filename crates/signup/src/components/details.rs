use color_eyre::Result;
use enrollment::{FieldId, Registration};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;

use super::Component;
use crate::{app::Mode, config::Config, utils::centered_rect};

/// Read-only confirmation view of a submitted record. Holds its own copy of
/// the data; there is nothing to edit and nowhere further to go.
pub struct DetailsComponent {
    config: Config,
    record: Registration,
}

impl DetailsComponent {
    pub fn new(record: Registration) -> Self {
        Self {
            config: Config::default(),
            record,
        }
    }

    /// Labeled rows in display order. The password is deliberately absent.
    fn rows(&self) -> Vec<(&'static str, &str)> {
        FieldId::iter()
            .filter(|field| *field != FieldId::Password)
            .map(|field| (field.label(), self.record.get(field)))
            .collect()
    }

    fn style(&self, key: &str) -> Style {
        self.config
            .styles
            .get(&Mode::Details)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl Component for DetailsComponent {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let title_style = self.style("title");
        let label_style = self.style("label");

        let rows = self.rows();
        let mut lines = vec![
            Line::from(Span::styled("Submitted Details", title_style)).centered(),
            Line::raw(""),
        ];
        let mut width = "Submitted Details".len();
        for (label, value) in &rows {
            width = width.max(label.len() + 2 + value.len());
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value.to_string()),
            ]));
        }

        let height = lines.len() as u16;
        let target = centered_rect(width as u16, height, area);
        frame.render_widget(Paragraph::new(lines), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> Registration {
        let mut record = Registration::default();
        record.set(FieldId::FirstName, "Asha");
        record.set(FieldId::Password, "hunter2!");
        record.set(FieldId::AadharNo, "1234567890123456");
        record
    }

    #[test]
    fn rows_omit_the_password() {
        let details = DetailsComponent::new(record());
        let rows = details.rows();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|(label, _)| *label != "Password"));
    }

    #[test]
    fn rows_follow_the_form_order() {
        let details = DetailsComponent::new(record());
        let labels: Vec<&str> = details.rows().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "First Name",
                "Last Name",
                "Username",
                "Email",
                "Phone No.",
                "Country",
                "City",
                "Pan No.",
                "Aadhar No.",
            ]
        );
    }

    #[test]
    fn rows_echo_the_submitted_values() {
        let details = DetailsComponent::new(record());
        let rows = details.rows();
        assert_eq!(rows[0], ("First Name", "Asha"));
        assert_eq!(rows[8], ("Aadhar No.", "1234567890123456"));
    }
}
