//! Application state

use crate::config::Config;
use crate::errors::{BrowseError, BrowseResult};
use crate::input::{Action, InputRouter};
use crate::providers::{DirectoryProvider, Launcher};
use crate::ui::Theme;

use super::{DirectoryView, Flow, Mode, Navigator};

/// Main application state
pub struct App {
    /// The directory on screen
    pub view: DirectoryView,

    // === Mode and control ===
    pub mode: Mode,
    pub should_quit: bool,

    // === Input and actions ===
    pub router: InputRouter,
    navigator: Navigator,

    // === Configuration ===
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
}

impl App {
    /// Open the provider's current directory.
    ///
    /// Only failing to learn the starting path is fatal. A listing error is
    /// shown in the error dialog over an empty grid.
    pub fn new(
        config: Config,
        provider: Box<dyn DirectoryProvider>,
        launcher: Box<dyn Launcher>,
    ) -> BrowseResult<Self> {
        let view = DirectoryView::new(provider, config.layout.geometry())?;
        let theme = config.theme.build_theme();
        let router = InputRouter::new(config.keybindings.clone());
        let navigator = Navigator::new(launcher, config.general.run_executables);

        let mut app = Self {
            view,
            mode: Mode::Normal,
            should_quit: false,
            router,
            navigator,
            config,
            theme,
        };

        log::info!("starting in {}", app.view.path().display());
        if let Err(e) = app.view.reload() {
            app.show_error(e);
        }
        app.view.apply_layout();
        Ok(app)
    }

    /// Carry out an action, reporting failures in the error dialog
    pub fn dispatch(&mut self, action: Action) {
        match self.navigator.apply(action, &mut self.view) {
            Ok(Flow::Quit) => self.should_quit = true,
            Ok(Flow::Continue) => {}
            Err(e) => self.show_error(e),
        }
    }

    pub fn show_error(&mut self, error: BrowseError) {
        log::warn!("{}", error);
        self.mode = Mode::Error {
            message: error.to_string(),
        };
    }

    pub fn dismiss_error(&mut self) {
        self.mode = Mode::Normal;
    }
}
