use std::collections::HashMap;

use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    action::{Action, Route},
    config::Config,
    pages::{DetailsPage, FormPage, Page},
    tui::{Event, Tui},
};

/// Which keybinding/style table is active. Follows the current route.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Form,
    Details,
}

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    pages: HashMap<String, Box<dyn Page>>,
    current_page: String,
    mode: Mode,
    should_quit: bool,
    should_suspend: bool,
    last_tick_key_events: Vec<KeyEvent>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // The details page is created on navigation, from the submitted
        // record; only the form exists up front.
        let mut pages: HashMap<String, Box<dyn Page>> = HashMap::new();
        pages.insert("form".to_string(), Box::new(FormPage::new()) as Box<dyn Page>);

        Ok(Self {
            tick_rate,
            frame_rate,
            pages,
            current_page: "form".to_string(),
            mode: Mode::Form,
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            config: Config::new()?,
            action_tx,
            action_rx,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
            page.register_action_handler(self.action_tx.clone())?;
            page.register_config_handler(self.config.clone())?;
            page.init(tui.size()?)?;
            // Force an initial full redraw after first page init
            let _ = self.action_tx.send(Action::ClearScreen);
            let _ = self.action_tx.send(Action::Render);
        }

        let action_tx = self.action_tx.clone();
        loop {
            self.handle_events(&mut tui).await?;
            self.handle_actions(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        let action_tx = self.action_tx.clone();
        match event {
            Event::Quit => action_tx.send(Action::Quit)?,
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Key(key) => self.handle_key_event(key)?,
            _ => {}
        }
        if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
            if let Some(action) = page.handle_events(Some(event.clone()))? {
                action_tx.send(action)?;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let action_tx = self.action_tx.clone();
        let Some(keymap) = self.config.keybindings.get(&self.mode) else {
            return Ok(());
        };
        match keymap.get(&vec![key]) {
            Some(action) => {
                info!("Got action: {action:?}");
                action_tx.send(action.clone())?;
            }
            _ => {
                // If the key was not handled as a single key action,
                // then consider it for multi-key combinations.
                self.last_tick_key_events.push(key);

                if let Some(action) = keymap.get(&self.last_tick_key_events) {
                    info!("Got action: {action:?}");
                    action_tx.send(action.clone())?;
                }
            }
        }
        Ok(())
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            match &action {
                Action::Tick | Action::Render => {}
                // Field values stay out of the log; only the destination is
                // recorded.
                Action::Navigate(route) => info!("navigate: {}", route.name()),
                other => debug!("{other:?}"),
            }
            let action_clone = action.clone();
            match &action_clone {
                Action::Tick => {
                    self.last_tick_key_events.drain(..);
                }
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Navigate(route) => self.navigate(tui, route)?,
                Action::Resize(w, h) => self.handle_resize(tui, *w, *h)?,
                Action::Render => self.render(tui)?,
                _ => {}
            }

            if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
                if let Some(action) = page.update(action_clone.clone())? {
                    self.action_tx.send(action)?
                };
            }
        }
        Ok(())
    }

    /// Switch pages. `Route::Details` carries the submitted record, from
    /// which a fresh details page is built; the typed payload makes entering
    /// the confirmation view without data unrepresentable.
    fn navigate(&mut self, tui: &mut Tui, route: &Route) -> Result<()> {
        if let Route::Details { form_data } = route {
            self.pages.insert(
                "details".to_string(),
                Box::new(DetailsPage::new(form_data.clone())) as Box<dyn Page>,
            );
        }

        if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
            let _ = page.on_exit();
        }

        self.current_page = route.name().to_string();
        self.mode = route.mode();

        if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
            page.register_action_handler(self.action_tx.clone())?;
            page.register_config_handler(self.config.clone())?;
            page.init(tui.size()?)?;
            page.on_enter()?;
        }

        // force a full redraw
        let _ = self.action_tx.send(Action::ClearScreen);
        let _ = self.action_tx.send(Action::Render);
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let action_tx = self.action_tx.clone();
        tui.draw(|frame| {
            if let Some(page) = self.pages.get_mut(self.current_page.as_str()) {
                if let Err(err) = page.draw(frame, frame.area()) {
                    let _ = action_tx.send(Action::Error(format!("Failed to draw: {err:?}")));
                }
            }
        })?;
        Ok(())
    }
}
