use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Fraction of the pointer's offset from the button center the button follows.
const PULL: f64 = 0.3;
const HOVER_SCALE: f64 = 1.05;
const REST_TRANSFORM: &str = "translate(0, 0) scale(1)";

/// Offset a magnetic button moves by, given the pointer position and the
/// button's bounding box `(left, top, width, height)`.
pub fn magnetic_offset(pointer: (f64, f64), rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    let x = pointer.0 - left - width / 2.0;
    let y = pointer.1 - top - height / 2.0;
    (x * PULL, y * PULL)
}

pub fn magnetic_transform(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px) scale({})", offset.0, offset.1, HOVER_SCALE)
}

fn set_style(button: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = button.style().set_property(property, value) {
        log::warn!("Failed to set {} on magnetic button: {:?}", property, e);
    }
}

/// Makes the referenced element lean towards the pointer while hovered.
#[hook]
pub fn use_magnetic(button: NodeRef) {
    use_effect_with_deps(
        move |button: &NodeRef| {
            let destructor: Box<dyn FnOnce()> = if let Some(button) = button.cast::<HtmlElement>() {
                let on_enter = Closure::<dyn Fn()>::new({
                    let button = button.clone();
                    // follow the pointer without lag
                    move || set_style(&button, "transition", "none")
                });
                let on_move = Closure::<dyn Fn(MouseEvent)>::new({
                    let button = button.clone();
                    move |e: MouseEvent| {
                        let rect = button.get_bounding_client_rect();
                        let offset = magnetic_offset(
                            (e.client_x() as f64, e.client_y() as f64),
                            (rect.left(), rect.top(), rect.width(), rect.height()),
                        );
                        set_style(&button, "transform", &magnetic_transform(offset));
                    }
                });
                let on_leave = Closure::<dyn Fn()>::new({
                    let button = button.clone();
                    move || {
                        if let Err(e) = button.style().remove_property("transition") {
                            log::warn!("Failed to restore magnetic button transition: {:?}", e);
                        }
                        set_style(&button, "transform", REST_TRANSFORM);
                    }
                });

                let listeners: [(&'static str, &Function); 3] = [
                    ("mouseenter", on_enter.as_ref().unchecked_ref()),
                    ("mousemove", on_move.as_ref().unchecked_ref()),
                    ("mouseleave", on_leave.as_ref().unchecked_ref()),
                ];
                for (event, callback) in listeners {
                    if let Err(e) = button.add_event_listener_with_callback(event, callback) {
                        log::warn!("Failed to attach {} listener: {:?}", event, e);
                    }
                }

                Box::new(move || {
                    let listeners: [(&'static str, &Function); 3] = [
                        ("mouseenter", on_enter.as_ref().unchecked_ref()),
                        ("mousemove", on_move.as_ref().unchecked_ref()),
                        ("mouseleave", on_leave.as_ref().unchecked_ref()),
                    ];
                    for (event, callback) in listeners {
                        if let Err(e) = button.remove_event_listener_with_callback(event, callback) {
                            log::warn!("Failed to detach {} listener: {:?}", event, e);
                        }
                    }
                })
            } else {
                Box::new(|| ())
            };
            move || {
                destructor();
            }
        },
        button,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn pointer_at_center_does_not_move_the_button() {
        assert_eq!(magnetic_offset((150.0, 60.0), (100.0, 40.0, 100.0, 40.0)), (0.0, 0.0));
    }

    #[test]
    fn button_follows_pointer_offset_scaled_by_pull() {
        // center is (150, 60); pointer is 50 right and 20 above it
        let (x, y) = magnetic_offset((200.0, 40.0), (100.0, 40.0, 100.0, 40.0));
        assert!((x - 15.0).abs() < EPS);
        assert!((y - -6.0).abs() < EPS);
    }

    #[test]
    fn hover_transform_scales_up() {
        assert_eq!(magnetic_transform((15.0, -6.0)), "translate(15px, -6px) scale(1.05)");
    }
}
