use crate::adapters::permalink::Permalink;
use crate::controllers::interactive::Session;
use crate::presenters::grid::pixel_buffer_sink::PixelBufferSink;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::time::Instant;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

pub const WINDOW_TITLE: &str = "Mandelgrid";

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    session: Session<PixelBufferSink>,
    cursor: Option<PhysicalPosition<f64>>,
    presented_frames: u64,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        session: Session<PixelBufferSink>,
    ) -> Self {
        Self {
            window,
            presenter,
            session,
            cursor: None,
            presented_frames: 0,
        }
    }

    /// The surface exists: let the session flush its pending first frame.
    pub fn start(&mut self, now: Instant) -> Result<(), Box<dyn Error>> {
        self.session.mark_ready(now)?;
        self.sync_frame();
        self.publish_permalink(self.session.permalink());

        Ok(())
    }

    pub fn redraw(&mut self, now: Instant) -> Result<(), Box<dyn Error>> {
        let report = self.session.tick(now)?;
        self.sync_frame();

        if report.settled {
            self.publish_permalink(self.session.permalink());
        }

        self.presenter.render()?;
        Ok(())
    }

    pub fn click(&mut self, now: Instant) -> Result<(), Box<dyn Error>> {
        let Some(position) = self.cursor else {
            return Ok(());
        };

        let Some(cell) = self.presenter.cell_at(position) else {
            log::debug!("click at {:?} is outside the window grid", position);
            return Ok(());
        };

        let report = self.session.click(cell, now)?;
        self.sync_frame();

        if let Some(permalink) = report.settled {
            self.publish_permalink(permalink);
        }

        Ok(())
    }

    /// Copies the sink into the surface if a frame completed since the last copy.
    fn sync_frame(&mut self) {
        let frames = self.session.sink().frames();
        if frames != self.presented_frames {
            self.presenter.update(self.session.sink().buffer());
            self.presented_frames = frames;
        }
    }

    fn publish_permalink(&self, permalink: Permalink) {
        log::info!("view: ?{}", permalink);
        self.window
            .set_title(&format!("{} ?{}", WINDOW_TITLE, permalink));
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), Box<dyn Error>> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(e) = self.redraw(Instant::now()) {
                        log::error!("redraw failed: {}", e);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = self.presenter.resize(size.width, size.height) {
                        log::error!("resize failed: {}", e);
                        elwt.exit();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => self.cursor = Some(*position),
                WindowEvent::CursorLeft { .. } => self.cursor = None,
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Err(e) = self.click(Instant::now()) {
                        log::error!("click failed: {}", e);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        Ok(())
    }
}
