use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{AddEventListenerOptions, Document, EventTarget, HtmlElement, WheelEvent, Window};

use super::controller::{FrameScheduler, ParallaxElement, ParallaxScrollController, ScrollSurface, WheelOutcome};
use super::geometry::{parse_speed, Rect, Translation};
use crate::config::{parallax_selector, PARALLAX_SPEED_ATTR, SCROLL_HOST_SELECTOR};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type DomController = ParallaxScrollController<DomSurface, AnimationFrames>;

pub struct DomSurface {
    window: Window,
    host: HtmlElement,
}

impl ScrollSurface for DomSurface {
    type Handle = HtmlElement;

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn bounding_rect(&self, handle: &HtmlElement) -> Rect {
        let rect = handle.get_bounding_client_rect();
        Rect::new(rect.left(), rect.width())
    }

    fn scroll_by(&mut self, delta: f64) {
        self.host.scroll_by_with_x_and_y(delta, 0.0);
    }

    fn write_transform(&mut self, handle: &HtmlElement, translation: Translation) {
        if let Err(e) = handle.style().set_property("transform", &translation.to_css()) {
            log::warn!("Failed to write parallax transform: {:?}", e);
        }
    }
}

/// `requestAnimationFrame` backed scheduler. The callback is installed after the
/// controller exists since it has to call back into it.
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
    type Token = i32;

    fn request(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("Failed to request animation frame: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, token: i32) {
        if let Err(e) = self.window.cancel_animation_frame(token) {
            log::warn!("Failed to cancel animation frame {}: {:?}", token, e);
        }
    }
}

/// Live controller plus the listeners feeding it. Dropping it tears everything down.
pub struct ParallaxBinding {
    controller: Rc<RefCell<DomController>>,
    window: Window,
    host: HtmlElement,
    on_wheel: Closure<dyn FnMut(WheelEvent)>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    frame_callback: FrameCallback,
    attached: bool,
}

/// Snapshot of the tagged elements present right now. Later insertions are not seen.
fn discover_elements(document: &Document) -> Vec<ParallaxElement<HtmlElement>> {
    let nodes = match document.query_selector_all(&parallax_selector()) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Parallax element query failed: {:?}", e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|element| {
            let speed = parse_speed(element.get_attribute(PARALLAX_SPEED_ATTR).as_deref());
            ParallaxElement::new(element, speed)
        })
        .collect()
}

fn find_host(document: &Document) -> Option<HtmlElement> {
    document
        .query_selector(SCROLL_HOST_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Starts the parallax on the current document. `None` means there was nothing
/// to drive (no window, no document or no scroll host) and no listener was added.
pub fn activate() -> Option<ParallaxBinding> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let Some(host) = find_host(&document) else {
        log::debug!("No scroll host found, parallax stays inactive");
        return None;
    };

    let elements = discover_elements(&document);
    log::debug!("Parallax activating with {} elements", elements.len());

    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    let surface = DomSurface {
        window: window.clone(),
        host: host.clone(),
    };
    let scheduler = AnimationFrames {
        window: window.clone(),
        callback: frame_callback.clone(),
    };
    let controller = Rc::new(RefCell::new(ParallaxScrollController::activate(
        Some(surface),
        elements,
        scheduler,
    )?));

    *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new({
        let controller = Rc::downgrade(&controller);
        move |_timestamp: f64| {
            if let Some(controller) = controller.upgrade() {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    controller.run_frame();
                }
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let on_wheel = Closure::wrap(Box::new({
        let controller = Rc::downgrade(&controller);
        move |event: WheelEvent| {
            // the host never scrolls vertically, whatever state the controller is in
            event.prevent_default();
            let Some(controller) = controller.upgrade() else { return };
            let Ok(mut controller) = controller.try_borrow_mut() else { return };
            if controller.wheel(event.delta_y()) == WheelOutcome::Ignored {
                log::debug!("Wheel input ignored by inactive parallax controller");
            }
        }
    }) as Box<dyn FnMut(WheelEvent)>);

    let on_scroll = Closure::wrap(Box::new({
        let controller = Rc::downgrade(&controller);
        move || {
            if let Some(controller) = controller.upgrade() {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    controller.scroll();
                }
            }
        }
    }) as Box<dyn FnMut()>);

    let on_resize = Closure::wrap(Box::new({
        let controller = Rc::downgrade(&controller);
        move || {
            if let Some(controller) = controller.upgrade() {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    controller.resize();
                }
            }
        }
    }) as Box<dyn FnMut()>);

    // preventDefault only works on non-passive wheel listeners
    let wheel_options = AddEventListenerOptions::new();
    wheel_options.set_passive(false);
    let scroll_options = AddEventListenerOptions::new();
    scroll_options.set_passive(true);

    let binding = ParallaxBinding {
        controller,
        window,
        host,
        on_wheel,
        on_scroll,
        on_resize,
        frame_callback,
        attached: true,
    };

    let attached = binding
        .host
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            binding.on_wheel.as_ref().unchecked_ref(),
            &wheel_options,
        )
        .and_then(|_| {
            binding.host.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                binding.on_scroll.as_ref().unchecked_ref(),
                &scroll_options,
            )
        })
        .and_then(|_| {
            binding
                .window
                .add_event_listener_with_callback("resize", binding.on_resize.as_ref().unchecked_ref())
        });

    if let Err(e) = attached {
        // dropping the binding detaches whatever did get attached
        log::warn!("Failed to attach parallax listeners: {:?}", e);
        return None;
    }

    Some(binding)
}

impl ParallaxBinding {
    /// Detaches every listener and cancels the pending frame. Safe to call twice.
    pub fn deactivate(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        self.controller.borrow_mut().deactivate();

        let listeners: [(&EventTarget, &str, &Function); 3] = [
            (&self.host, "wheel", self.on_wheel.as_ref().unchecked_ref()),
            (&self.host, "scroll", self.on_scroll.as_ref().unchecked_ref()),
            (&self.window, "resize", self.on_resize.as_ref().unchecked_ref()),
        ];
        for (target, event, callback) in listeners {
            if let Err(e) = target.remove_event_listener_with_callback(event, callback) {
                log::warn!("Failed to detach parallax {} listener: {:?}", event, e);
            }
        }

        self.frame_callback.borrow_mut().take();
        log::debug!("Parallax deactivated");
    }
}

impl Drop for ParallaxBinding {
    fn drop(&mut self) {
        self.deactivate();
    }
}
