//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes input to whichever layer currently owns it and applies every
//! Action to the model. Child components only translate events and draw.

use crate::action::Action;
use crate::component::Component;
use crate::components::bios::{self, NOT_IMPLEMENTED_MESSAGE, SAVE_EXIT_MESSAGE};
use crate::components::board;
use crate::components::component_dialog::max_description_scroll;
use crate::components::layout::{contains, toggle_button_rect, HOTSPOT_SLOTS};
use crate::components::{
    calculate_main_layout, draw_notifications, render_header, BiosComponent, BoardComponent,
    ComponentDialog, FocusTarget, HelpDialog, QuitDialog, SplashComponent,
};
use crate::config::{key_label, Config};
use crate::error::BoardError;
use crate::model::{
    AppMode, Dialog, HandlerSet, ModalState, NotificationQueue, Registry, Scheduler, TaskToken,
    ViewState, ViewToggle,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    pub config: Config,

    /// Static component metadata
    pub registry: Registry,

    /// Component information overlay
    pub modal: ModalState,

    /// Motherboard / BIOS switch
    pub view: ViewToggle,

    /// Transient messages
    pub notifications: NotificationQueue,

    /// Deferred actions, fired from `on_tick`
    pub scheduler: Scheduler<Action>,

    /// Outstanding BIOS save-and-exit task, if any
    pub pending_exit: Option<TaskToken>,

    /// Auxiliary dialog drawn above everything else
    pub dialog: Option<Dialog>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Terminal area from the latest `Action::Resize`; drawing and mouse hit
    /// testing both use it
    pub area: Rect,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub board: BoardComponent,
    pub bios: BiosComponent,
    pub component_dialog: ComponentDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Build the app and run the startup annotation pass.
    ///
    /// Fails if a registered component has no hotspot on the board or the
    /// configured exit key cannot be parsed.
    pub fn new(config: Config) -> Result<App, BoardError> {
        let registry = Registry::builtin()?;
        let board = BoardComponent::setup(&registry, &HOTSPOT_SLOTS)?;
        let exit_key = config.exit_key_code()?;

        let ms = Duration::from_millis;
        let app = App {
            mode: AppMode::Loading,
            modal: ModalState::new(),
            view: ViewToggle::new(),
            notifications: NotificationQueue::new(
                ms(config.notification_ms),
                ms(config.notification_fade_ms),
            ),
            scheduler: Scheduler::new(),
            pending_exit: None,
            dialog: None,
            should_quit: false,
            area: Rect::new(0, 0, 80, 24),
            splash: SplashComponent::new(ms(config.loading_ms), ms(config.loading_fade_ms)),
            board,
            bios: BiosComponent::new(&registry, exit_key),
            component_dialog: ComponentDialog,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::new(key_label(exit_key)),
            registry,
            config,
        };
        info!(
            components = app.registry.len(),
            hotspots = app.board.hotspots().len(),
            exit_key = %key_label(exit_key),
            "board ready"
        );
        Ok(app)
    }

    /// Apply an action and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(a) = current {
            current = self.update(a)?;
        }
        Ok(())
    }

    /// Time-driven work: leave the loading screen, fire due tasks and drop
    /// expired notifications.
    pub fn on_tick(&mut self, now: Instant) -> Result<()> {
        if self.mode == AppMode::Loading && self.splash.is_complete_at(now) {
            self.dispatch(Action::LoadingComplete)?;
        }

        for (_, action) in self.scheduler.take_due(now) {
            debug!(%action, "scheduled action due");
            self.dispatch(action)?;
        }

        let expired = self.notifications.prune(now);
        if expired > 0 {
            debug!(expired, "notifications expired");
        }
        Ok(())
    }

    fn cancel_pending_exit(&mut self) {
        if let Some(token) = self.pending_exit.take() {
            if self.scheduler.cancel(token) {
                debug!("pending BIOS exit cancelled");
            }
        }
    }

    /// Deepest description scroll for the open modal at the current size
    fn modal_scroll_limit(&self) -> u16 {
        self.modal
            .active_record()
            .map(|record| max_description_scroll(self.area, record))
            .unwrap_or(0)
    }

    fn open_component(&mut self, id: &str) {
        match self.registry.require(id) {
            Ok(record) => {
                self.modal.open(record);
                self.board.focus_id(id);
                info!(id, "component modal opened");
            }
            Err(err) => debug!(%err, "activation ignored"),
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Loading => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(dialog) = self.dialog {
                    return self.handle_dialog_key_event(dialog, key);
                }

                // The open modal swallows every key it does not bind
                if self.modal.is_open() {
                    return self.component_dialog.handle_key_event(key);
                }

                if self.view.handles(HandlerSet::Bios) {
                    if let Some(action) = self.bios.handle_key_event(key)? {
                        return Ok(Some(action));
                    }
                }

                if self.view.handles(HandlerSet::Global) {
                    match key.code {
                        KeyCode::Char('b') => return Ok(Some(Action::ToggleView)),
                        KeyCode::Char('?') => return Ok(Some(Action::OpenHelp)),
                        _ => {}
                    }
                }

                match self.view.state() {
                    ViewState::Primary => self.board.handle_key_event(key),
                    ViewState::Secondary => Ok(None),
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        let is_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
        match self.mode {
            AppMode::Loading => Ok(is_click.then_some(Action::LoadingComplete)),
            AppMode::Running => {
                if self.dialog.is_some() {
                    return Ok(None);
                }
                if self.modal.is_open() {
                    return self.component_dialog.handle_mouse_event(mouse, area);
                }

                let layout = calculate_main_layout(area);
                let toggle = toggle_button_rect(layout.header, self.view.toggle_label());
                if is_click && contains(toggle, mouse.column, mouse.row) {
                    return Ok(Some(Action::ToggleView));
                }

                match self.view.state() {
                    ViewState::Primary => self.board.handle_mouse_event(mouse, layout.body),
                    ViewState::Secondary => Ok(None),
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.on_tick(Instant::now())?,
            Action::Resize(width, height) => {
                self.area = Rect::new(0, 0, width, height);
                self.board.clamp_pan(calculate_main_layout(self.area).body);
                let limit = self.modal_scroll_limit();
                self.modal.clamp_scroll(limit);
                self.help_dialog.update(Action::Resize(width, height))?;
            }
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }
            Action::LoadingComplete => {
                if self.mode == AppMode::Loading {
                    self.mode = AppMode::Running;
                    info!("loading complete");
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Board Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext => self.board.focus_next(),
            Action::FocusPrev => self.board.focus_prev(),
            Action::PanDown => {
                if !self.modal.is_scroll_locked() {
                    self.board.pan_down(calculate_main_layout(self.area).body);
                }
            }
            Action::PanUp => {
                if !self.modal.is_scroll_locked() {
                    self.board.pan_up();
                }
            }
            Action::HoverHotspot(id) => self.board.set_hovered(id.as_deref()),

            // ─────────────────────────────────────────────────────────────────
            // Component Modal
            // ─────────────────────────────────────────────────────────────────
            Action::OpenComponent(id) => self.open_component(&id),
            Action::CloseModal => {
                if self.modal.close() {
                    debug!("component modal closed");
                }
            }
            Action::ModalScrollDown => {
                let limit = self.modal_scroll_limit();
                self.modal.scroll_down(1, limit);
            }
            Action::ModalScrollUp => self.modal.scroll_up(1),

            // ─────────────────────────────────────────────────────────────────
            // Views
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleView => {
                self.cancel_pending_exit();
                let state = self.view.toggle();
                info!(?state, "view toggled");
            }
            Action::BiosSaveExit => {
                let now = Instant::now();
                self.notifications.show(SAVE_EXIT_MESSAGE, now);
                self.cancel_pending_exit();
                let delay = Duration::from_millis(self.config.bios_exit_delay_ms);
                self.pending_exit =
                    Some(self.scheduler.schedule(delay, Action::BiosExitElapsed, now));
                debug!(delay_ms = self.config.bios_exit_delay_ms, "BIOS exit scheduled");
            }
            Action::BiosExitElapsed => {
                self.pending_exit = None;
                if self.view.is_bios() {
                    return Ok(Some(Action::ToggleView));
                }
            }
            Action::BiosAdvanced => {
                self.notifications.show(NOT_IMPLEMENTED_MESSAGE, Instant::now());
            }

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.dialog = Some(Dialog::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.dialog = Some(Dialog::Help);
            }
            Action::CloseDialog => self.dialog = None,
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Loading => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);
                let toggle_label = self.view.toggle_label();
                let toggle_focused =
                    !self.view.is_bios() && self.board.focused() == FocusTarget::Toggle;
                render_header(
                    frame,
                    layout.header,
                    self.view.state(),
                    toggle_label,
                    toggle_focused,
                );

                match self.view.state() {
                    ViewState::Primary => {
                        self.board.draw(frame, layout.body)?;
                        let status = layout.status;
                        board::render_status_bar(frame, status, &self.board, toggle_label);
                        board::render_help_bar(frame, layout.help);
                    }
                    ViewState::Secondary => {
                        self.bios.draw(frame, layout.body)?;
                        bios::render_help_bar(frame, layout.help);
                    }
                }

                if let Some(record) = self.modal.active_record() {
                    self.component_dialog.draw_with_record(
                        frame,
                        area,
                        record,
                        self.modal.scroll_offset,
                    )?;
                }

                draw_notifications(frame, area, &self.notifications, Instant::now());

                match self.dialog {
                    Some(Dialog::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
                    Some(Dialog::Help) => self.help_dialog.draw(frame, area)?,
                    None => {}
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_dialog_key_event(
        &mut self,
        dialog: Dialog,
        key: KeyEvent,
    ) -> Result<Option<Action>> {
        match dialog {
            Dialog::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Dialog::Help => self.help_dialog.handle_key_event(key),
        }
    }
}
