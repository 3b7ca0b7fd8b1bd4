use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Rect, Size},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, config::Config, tui::Event};

mod details;
mod form;

pub use details::DetailsPage;
pub use form::FormPage;

/// A `Page` composes `Component`s and exposes the component lifecycle one
/// level up. The app keeps a registry of pages and forwards events and
/// actions to whichever is current.
pub trait Page {
    fn name(&self) -> &str;

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn init(&mut self, area: Size) -> Result<()> {
        let _ = area;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let _ = event;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the page using the provided `Frame` and `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Called when the page becomes active.
    fn on_enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the page is leaving / being replaced.
    fn on_exit(&mut self) -> Result<()> {
        Ok(())
    }
}
