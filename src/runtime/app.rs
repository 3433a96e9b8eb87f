use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window};

use companion::commands::Cmd;
use companion::layout;
use companion::messages::{AgentMsg, ChatMsg, Msg, PointerButton, UiMsg};
use companion::model::AppModel;
use companion::update::{scripted_reply, update, AGENT_TASK_DELAY_MS, REPLY_DELAY_MS};

use super::input::handle_key;
use crate::view::Renderer;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    mouse_position: Option<(f64, f64)>,
    last_tick: Instant,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    initial_size: (u32, u32),
}

impl App {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let model = AppModel::new(window_width, window_height);

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            mouse_position: None,
            last_tick: Instant::now(),
            msg_tx,
            msg_rx,
            initial_size: (window_width, window_height),
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context)?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else { return };

        let icon = if self.model.panel.is_dragging() {
            CursorIcon::Grabbing
        } else if layout::model_slot(&self.model.panel).contains(x as f32, y as f32) {
            CursorIcon::Grab
        } else if layout::chat_input_rect(&self.model.panel).contains(x as f32, y as f32)
            || layout::agent_input_rect(&self.model.panel)
                .is_some_and(|r| r.contains(x as f32, y as f32))
        {
            CursorIcon::Text
        } else {
            CursorIcon::Default
        };
        window.set_cursor(icon);
    }

    fn map_button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            MouseButton::Middle => Some(PointerButton::Auxiliary),
            _ => None,
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::warn!("Failed to resize surface: {}", e);
                    }
                }
                update(&mut self.model, Msg::resize(size.width, size.height))
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                self.update_cursor_icon(position.x, position.y);

                // Motion is forwarded into the controller only while a drag
                // session is live; the session is the subscription scope
                if self.model.panel.is_dragging() {
                    return update(
                        &mut self.model,
                        Msg::pointer_moved(position.x as f32, position.y as f32),
                    );
                }
                None
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                let button = Self::map_button(*button)?;
                update(
                    &mut self.model,
                    Msg::pointer_pressed(x as f32, y as f32, button),
                )
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position.unwrap_or((0.0, 0.0));
                update(&mut self.model, Msg::pointer_released(x as f32, y as f32))
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    handle_key(&mut self.model, &event.logical_key)
                } else {
                    None
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
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

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SimulateReply { prompt } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(REPLY_DELAY_MS));
                    let _ = tx.send(Msg::Chat(ChatMsg::ReplyReady(scripted_reply(&prompt))));
                });
            }
            Cmd::RunAgentTask { task } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(AGENT_TASK_DELAY_MS));
                    let _ = tx.send(Msg::Agent(AgentMsg::TaskCompleted { task }));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
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
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.initial_size;
            let window_attributes = Window::default_attributes()
                .with_title("Companion")
                .with_inner_size(LogicalSize::new(width, height));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();

            if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
                tracing::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        if self.process_async_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) > Duration::from_millis(500) {
            self.last_tick = now;
            if self.tick().is_some() {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }
}
