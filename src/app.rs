use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::event::Event;
use crate::system::host::{DisplayFields, HostInfo};
use crate::system::provider::MetricsProvider;
use crate::system::sampler::Sampler;
use crate::system::snapshot::Snapshot;
use crate::ui::panel;

/// Time between the end of one tick and the start of the next.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What the runtime has to do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    ScheduleTick(Duration),
    Quit,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
        }
    }

    pub fn quit_label(&self) -> String {
        key_label(self.quit)
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App<P> {
    pub state: SessionState,
    pub snapshot: Snapshot,
    pub host: HostInfo,
    pub keybinds: ResolvedKeybinds,
    sampler: Sampler<P>,
}

impl<P: MetricsProvider> App<P> {
    /// Resolves the host rows once; the snapshot starts zeroed until the first tick.
    pub fn new(mut sampler: Sampler<P>, config: &Config) -> Self {
        let fields = DisplayFields::from_config(&config.display);
        let host = HostInfo::resolve(fields, sampler.host_identity());
        info!(?fields, hostname = %host.hostname, "session started");

        App {
            state: SessionState::Running,
            snapshot: Snapshot::default(),
            host,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            sampler,
        }
    }

    /// The first tick fires immediately.
    pub fn init(&self) -> Command {
        Command::ScheduleTick(Duration::ZERO)
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn handle_event(&mut self, event: &Event) -> Command {
        if !self.is_running() {
            return Command::None;
        }
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.map_key(*key);
                self.dispatch(action)
            }
            Event::Key(_) | Event::Resize | Event::InputClosed => Command::None,
        }
    }

    pub fn on_tick(&mut self) -> Command {
        if !self.is_running() {
            return Command::None;
        }
        self.snapshot = self.sampler.sample();
        Command::ScheduleTick(TICK_INTERVAL)
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits regardless of keybinds
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if key.code == self.keybinds.quit {
            return Action::Quit;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => {
                debug!("quit requested");
                self.state = SessionState::Terminated;
                Command::Quit
            }
            Action::None => Command::None,
        }
    }

    /// Panel text for the current snapshot.
    pub fn render(&self) -> String {
        panel::render(&self.snapshot, &self.host, &self.keybinds.quit_label())
    }
}
