use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use ipja_config::Config;
use ipja_core::{AnimationSpeed, SceneKind};
use ipja_scene::SceneState;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the animation clock frozen?
    paused: bool,
    /// Currently displayed scene.
    scene: SceneKind,
    /// Current playback speed.
    speed: AnimationSpeed,
    /// How long to wait for input between frames.
    frame_budget: Duration,
    /// Animation seconds accumulated before `started` (folds in pauses
    /// and speed changes).
    base: f32,
    /// Animation seconds at the moment of pausing.
    frozen: f32,
    /// Wall-clock anchor for the unpaused stretch.
    started: Instant,
    /// Scene animators and renderers.
    scenes: SceneState,
    /// Loaded settings, written back on quit.
    config: Config,
}

impl App {
    /// Construct the app from loaded settings.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            paused: false,
            scene: config.scene(),
            speed: config.speed(),
            frame_budget: Duration::from_millis(1000 / config.fps() as u64),
            base: 0.0,
            frozen: 0.0,
            started: Instant::now(),
            scenes: SceneState::new(config.particle_count(), config.seed),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        // Remember the scene and speed the user settled on.
        self.config.scene = self.scene.as_name().to_string();
        self.config.speed = self.speed.as_name().to_string();
        self.config.save()?;
        Ok(())
    }

    /// Seconds on the animation clock.
    fn elapsed_seconds(&self) -> f32 {
        if self.paused {
            self.frozen
        } else {
            self.base + self.started.elapsed().as_secs_f32() * self.speed.factor()
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Scene
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let elapsed = self.elapsed_seconds();
        self.scenes.render(frame, chunks[0], self.scene, elapsed);

        let status = if self.paused { "paused" } else { self.speed.as_name() };
        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "s".bold(),
            " scene  ".dark_gray(),
            "a".bold(),
            " speed  ".dark_gray(),
            "space".bold(),
            " pause  ".dark_gray(),
            "r".bold(),
            " restart   ".dark_gray(),
            self.scene.label().bold(),
            format!(" · {status}").dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a frame-rate timeout so the animation keeps
    /// moving while no keys are pressed.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_budget)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_scene(),
            (_, KeyCode::Char('a')) => self.cycle_speed(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('r')) => self.restart(),
            _ => {}
        }
    }

    /// Switch to the next scene.
    fn cycle_scene(&mut self) {
        self.scene = self.scene.next();
    }

    /// Cycle the playback speed, folding time accumulated at the old
    /// speed into the base so the clock never jumps.
    fn cycle_speed(&mut self) {
        if !self.paused {
            self.base = self.elapsed_seconds();
            self.started = Instant::now();
        }
        self.speed = self.speed.next();
    }

    /// Freeze or resume the animation clock.
    fn toggle_pause(&mut self) {
        if self.paused {
            self.base = self.frozen;
            self.started = Instant::now();
            self.paused = false;
        } else {
            self.frozen = self.elapsed_seconds();
            self.paused = true;
        }
    }

    /// Restart the animation from the top of the cycle.
    fn restart(&mut self) {
        self.base = 0.0;
        self.frozen = 0.0;
        self.started = Instant::now();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
