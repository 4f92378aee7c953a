//! Starfield Canvas Component
//!
//! Full-viewport background canvas. Owns its `Starfield` and redraws it
//! on every animation frame until the page unloads.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{AppError, AppResult};
use crate::starfield::{Starfield, StarfieldConfig};

struct Renderer {
    field: Starfield,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    fn new(canvas: HtmlCanvasElement, config: StarfieldConfig) -> AppResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::browser("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::browser("not a 2d context"))?;
        Ok(Self {
            field: Starfield::new(config),
            canvas,
            ctx,
        })
    }

    fn fit_to_viewport(&mut self) {
        let (width, height) = viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height, &mut rand::thread_rng());
        log::debug!("[STARFIELD] {}x{}, {} particles", width, height, self.field.particles().len());
    }

    fn draw_frame(&mut self) {
        let (width, height) = self.field.size();
        let config = *self.field.config();
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.field.step(&mut rand::thread_rng());
        for p in self.field.particles() {
            self.ctx.begin_path();
            if let Err(err) = self.ctx.arc(p.x, p.y, p.radius, 0.0, TAU) {
                log::error!("[STARFIELD] arc failed: {:?}", err);
            }
            self.ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", p.opacity));
            self.ctx.fill();
        }

        let links = self.field.links();
        let pointer = self.field.pointer();
        self.ctx.set_line_width(config.line_width);

        for link in &links.pointer {
            let gradient = self.ctx.create_linear_gradient(link.from.0, link.from.1, pointer.0, pointer.1);
            let stops = gradient
                .add_color_stop(0.0, &config.link_color(link.opacity))
                .and_then(|_| gradient.add_color_stop(1.0, &config.link_color(config.pointer_end_opacity)));
            if let Err(err) = stops {
                log::error!("[STARFIELD] gradient stop failed: {:?}", err);
            }
            self.ctx.set_stroke_style_canvas_gradient(&gradient);
            self.stroke_line(link.from, pointer);
        }
        for link in &links.particles {
            self.ctx.set_stroke_style_str(&config.link_color(link.opacity));
            self.stroke_line(link.from, link.to);
        }
    }

    fn stroke_line(&self, from: (f64, f64), to: (f64, f64)) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("[STARFIELD] requestAnimationFrame failed: {:?}", err);
        }
    }
}

/// Bind resize/mousemove and start the frame loop. Runs for the page lifetime.
fn start(canvas: HtmlCanvasElement, config: StarfieldConfig) -> AppResult<()> {
    let renderer = Rc::new(RefCell::new(Renderer::new(canvas, config)?));
    renderer.borrow_mut().fit_to_viewport();

    let win = web_sys::window().ok_or_else(|| AppError::browser("no window"))?;

    let on_resize = {
        let renderer = renderer.clone();
        Closure::<dyn FnMut()>::new(move || renderer.borrow_mut().fit_to_viewport())
    };
    win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let on_mousemove = {
        let renderer = renderer.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            renderer
                .borrow_mut()
                .field
                .set_pointer(ev.client_x() as f64, ev.client_y() as f64);
        })
    };
    win.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref())?;
    on_mousemove.forget();

    // The frame callback holds itself to reschedule each frame
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    *first.borrow_mut() = Some(Closure::new(move || {
        renderer.borrow_mut().draw_frame();
        if let Some(callback) = frame.borrow().as_ref() {
            request_frame(callback);
        }
    }));
    if let Some(callback) = first.borrow().as_ref() {
        request_frame(callback);
    }
    Ok(())
}

/// Decorative background canvas
#[component]
pub fn StarfieldCanvas(#[prop(optional)] config: Option<StarfieldConfig>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let config = config.unwrap_or_default();

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        if let Err(err) = start(canvas, config) {
            log::error!("[STARFIELD] Failed to start: {}", err);
        }
        true
    });

    view! { <canvas id="starfield" node_ref=canvas_ref></canvas> }
}
