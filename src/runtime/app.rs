use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use anyhow::{Context as _, Result};
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use safe_edit::commands::Cmd;
use safe_edit::editable::TextEditMsg;
use safe_edit::messages::{AppMsg, FieldMsg, Msg, UiMsg};
use safe_edit::model::ui::CURSOR_BLINK_INTERVAL;
use safe_edit::model::AppModel;
use safe_edit::update::update;
use safe_edit::view::Renderer;

use super::input::map_key;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Moved into the renderer once the window exists
    font: Option<Font>,
    last_tick: Instant,
    modifiers: ModifiersState,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    quit_requested: bool,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel, font: Font) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            font: Some(font),
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            msg_tx,
            msg_rx,
            quit_requested: false,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let font = self.font.take().context("Font already consumed")?;
        let window_attributes = Window::default_attributes()
            .with_title("safe-edit")
            .with_inner_size(LogicalSize::new(
                self.model.config.window_width,
                self.model.config.window_height,
            ));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            font,
            self.model.config.font_size,
        )?;

        let size = window.inner_size();
        let char_width = renderer.char_width();
        update(
            &mut self.model,
            Msg::App(AppMsg::ScaleFactorChanged(window.scale_factor())),
        );
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(size.width, size.height)),
        );
        update(&mut self.model, Msg::App(AppMsg::FontMetrics { char_width }));

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let char_width = match &mut self.renderer {
                    Some(renderer) => match renderer.set_scale_factor(*scale_factor) {
                        Ok(()) => Some(renderer.char_width()),
                        Err(e) => {
                            tracing::error!("Failed to rescale font: {:#}", e);
                            None
                        }
                    },
                    None => None,
                };
                let cmd = update(
                    &mut self.model,
                    Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
                );
                match char_width {
                    Some(char_width) => Cmd::merge(
                        cmd,
                        update(&mut self.model, Msg::App(AppMsg::FontMetrics { char_width })),
                    ),
                    None => cmd,
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let msg = map_key(&event.logical_key, self.modifiers.into())?;
                update(&mut self.model, msg)
            }
            WindowEvent::CursorMoved { position, .. } => update(
                &mut self.model,
                Msg::Ui(UiMsg::PointerMoved {
                    x: position.x,
                    y: position.y,
                }),
            ),
            WindowEvent::CursorLeft { .. } => update(&mut self.model, Msg::Ui(UiMsg::PointerLeft)),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let msg = match state {
                    ElementState::Pressed => UiMsg::PointerPressed,
                    ElementState::Released => UiMsg::PointerReleased,
                };
                update(&mut self.model, Msg::Ui(msg))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(UiMsg::BlinkCursor))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::SetClipboard(text) => match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(text) {
                        tracing::warn!("Failed to write clipboard: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
            },
            Cmd::RequestPaste => {
                let text = arboard::Clipboard::new().and_then(|mut c| c.get_text());
                match text {
                    Ok(text) => {
                        let msg = Msg::Focused(FieldMsg::Edit(TextEditMsg::Paste(text)));
                        let _ = self.msg_tx.send(msg);
                    }
                    Err(e) => tracing::debug!("Nothing to paste: {}", e),
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => self.quit_requested = true,
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Startup failed: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                self.request_redraw();
            }
        }

        if self.quit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.process_async_messages() {
            self.request_redraw();
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= CURSOR_BLINK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some() {
                self.request_redraw();
            }
        }

        if self.quit_requested {
            event_loop.exit();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                self.last_tick + CURSOR_BLINK_INTERVAL,
            ));
        }
    }
}
