// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the viewer component to the Iced runtime.
//!
//! The app itself is thin. It loads the config, resolves the locale, kicks
//! off the startup page load, and forwards everything else to the viewer
//! component. Policy that affects the window (default size, icon, theme)
//! lives here so it is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{self, Page};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer_has_image", &self.viewer.has_image())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            viewer: component::State::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup page load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Warning: {warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let show_info_panel = config
            .viewer
            .show_info_panel
            .unwrap_or(config::DEFAULT_SHOW_INFO_PANEL);

        let app = App {
            i18n,
            viewer: component::State::new(show_info_panel),
            theme_mode: config.general.theme_mode,
        };

        let load = match flags.file_path {
            Some(path) => Task::perform(async move { media::load_image(&path) }, |result| {
                Message::Viewer(component::Message::PageLoaded(result))
            }),
            None => Task::perform(
                async { media::load_page(&Page::default_page()) },
                |result| Message::Viewer(component::Message::PageLoaded(result)),
            ),
        };

        let task = Task::batch([
            Task::done(Message::Viewer(component::Message::Appeared)),
            load,
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.viewer.needs_tick());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            viewer: &mut self.viewer,
        };

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }
}
