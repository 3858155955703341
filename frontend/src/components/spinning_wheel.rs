use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::thread_rng;
use shared::question::Question;
use shared::wheel::{Frame, SpinWheel, WHEEL_SEGMENTS, WHEEL_SIZE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinningWheelProps {
    pub questions: Vec<Question>,
    pub on_spin_complete: Callback<Question>,
}

struct SegmentColor {
    base: &'static str,
    light: &'static str,
    dark: &'static str,
}

// Google colors for the 4 segments - Red, Blue, Green, Yellow
const SEGMENT_COLORS: [SegmentColor; WHEEL_SEGMENTS] = [
    SegmentColor { base: "#EA4335", light: "#FF6B6B", dark: "#D32F2F" },
    SegmentColor { base: "#4285F4", light: "#64B5F6", dark: "#1976D2" },
    SegmentColor { base: "#34A853", light: "#66BB6A", dark: "#2E7D32" },
    SegmentColor { base: "#FBBC05", light: "#FFD54F", dark: "#F9A825" },
];

/// Redraws the whole wheel for the given rotation. Pure function of the
/// rotation angle; every other visual parameter is a constant.
fn draw_wheel(ctx: &CanvasRenderingContext2d, size: f64, rot: f64) {
    let center_x = size / 2.0;
    let center_y = size / 2.0;
    let radius = size / 2.0 - 20.0;
    let segment_angle = TAU / WHEEL_SEGMENTS as f64;

    ctx.clear_rect(0.0, 0.0, size, size);

    // Segments, rotated by offsetting their start angles
    for (i, color) in SEGMENT_COLORS.iter().enumerate() {
        let start_angle = i as f64 * segment_angle + rot;
        let end_angle = start_angle + segment_angle;

        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius, start_angle, end_angle);
        ctx.close_path();

        match ctx.create_radial_gradient(center_x, center_y, radius * 0.2, center_x, center_y, radius) {
            Ok(gradient) => {
                let _ = gradient.add_color_stop(0.0, color.light);
                let _ = gradient.add_color_stop(0.5, color.base);
                let _ = gradient.add_color_stop(1.0, color.dark);
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Err(_) => ctx.set_fill_style_str(color.base),
        }
        ctx.fill();

        // Soft highlight across the segment
        ctx.save();
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius * 0.8, start_angle, end_angle);
        ctx.close_path();
        ctx.clip();

        let mid_angle = start_angle + segment_angle / 2.0;
        let highlight = ctx.create_linear_gradient(
            center_x + (mid_angle - 0.4).cos() * radius * 0.4,
            center_y + (mid_angle - 0.4).sin() * radius * 0.4,
            center_x + (mid_angle + 0.4).cos() * radius * 0.6,
            center_y + (mid_angle + 0.4).sin() * radius * 0.6,
        );
        let _ = highlight.add_color_stop(0.0, "rgba(255, 255, 255, 0)");
        let _ = highlight.add_color_stop(0.3, "rgba(255, 255, 255, 0.25)");
        let _ = highlight.add_color_stop(0.7, "rgba(255, 255, 255, 0.15)");
        let _ = highlight.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        ctx.set_fill_style_canvas_gradient(&highlight);
        ctx.fill_rect(0.0, 0.0, size, size);
        ctx.restore();

        // Segment border
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.5)");
        ctx.set_line_width(2.5);
        ctx.stroke();
    }

    // Outer ring
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, radius, 0.0, TAU);
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(5.0);
    ctx.stroke();

    // Inner decorative ring
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, radius - 2.5, 0.0, TAU);
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Notches at the segment divisions (these do not rotate)
    for i in 0..WHEEL_SEGMENTS {
        let angle = i as f64 * segment_angle;
        let inner_r = radius - 15.0;
        let outer_r = radius + 2.0;

        ctx.begin_path();
        ctx.move_to(center_x + angle.cos() * inner_r, center_y + angle.sin() * inner_r);
        ctx.line_to(center_x + angle.cos() * outer_r, center_y + angle.sin() * outer_r);
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(4.0);
        ctx.stroke();
    }

    // Center disc
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, 50.0, 0.0, TAU);
    ctx.set_fill_style_str("#ffffff");
    ctx.fill();
    ctx.set_stroke_style_str("#d0d0d0");
    ctx.set_line_width(3.0);
    ctx.stroke();

    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, 46.0, 0.0, TAU);
    ctx.set_stroke_style_str("#e0e0e0");
    ctx.set_line_width(1.5);
    ctx.stroke();

    // GDG lettering in the center, SOE beneath
    ctx.set_font("bold 20px system-ui, -apple-system, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let letter_spacing = 12.0;
    ctx.set_fill_style_str("#EA4335");
    let _ = ctx.fill_text("G", center_x - letter_spacing, center_y - 9.0);
    ctx.set_fill_style_str("#34A853");
    let _ = ctx.fill_text("D", center_x, center_y - 9.0);
    ctx.set_fill_style_str("#FBBC05");
    let _ = ctx.fill_text("G", center_x + letter_spacing, center_y - 9.0);

    ctx.set_font("13px system-ui, -apple-system, sans-serif");
    ctx.set_fill_style_str("#000000");
    let _ = ctx.fill_text("SOE", center_x, center_y + 11.0);

    // Pointer on the right side
    let pointer_size = 26.0;
    let pointer_offset = 10.0;

    ctx.begin_path();
    ctx.move_to(size - pointer_offset, center_y - pointer_size);
    ctx.line_to(size - pointer_offset, center_y + pointer_size);
    ctx.line_to(size - pointer_offset - 38.0, center_y);
    ctx.close_path();

    let gradient = ctx.create_linear_gradient(size - pointer_offset - 38.0, center_y, size - pointer_offset, center_y);
    let _ = gradient.add_color_stop(0.0, "#ffffff");
    let _ = gradient.add_color_stop(0.5, "#f5f5f5");
    let _ = gradient.add_color_stop(1.0, "#e0e0e0");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    ctx.set_stroke_style_str("rgba(0, 0, 0, 0.15)");
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Pointer highlight
    ctx.begin_path();
    ctx.move_to(size - pointer_offset - 2.0, center_y - pointer_size + 6.0);
    ctx.line_to(size - pointer_offset - 2.0, center_y - 2.0);
    ctx.line_to(size - pointer_offset - 32.0, center_y - 3.0);
    ctx.close_path();
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
    ctx.fill();
}

fn schedule_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    window()?.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

fn cancel_frame(id: i32) {
    if let Some(window) = window() {
        let _ = window.cancel_animation_frame(id);
    }
}

/// The wheel canvas plus its spin button. Owns the spin engine; reports the
/// chosen question upward through `on_spin_complete` when a spin finishes.
#[function_component(SpinningWheel)]
pub fn spinning_wheel(props: &SpinningWheelProps) -> Html {
    let canvas_ref = use_node_ref();
    let engine = use_mut_ref(SpinWheel::new);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let is_hovered = use_state(|| false);
    // Pending frame id of the spin loop, for cancellation on teardown
    let spin_frame = use_mut_ref(|| None::<i32>);

    // Redraw whenever the rotation changes
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(*rotation, move |&rot| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(WHEEL_SIZE);
                canvas.set_height(WHEEL_SIZE);
                if let Some(ctx) = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                {
                    draw_wheel(&ctx, WHEEL_SIZE as f64, rot);
                }
            }
            || ()
        });
    }

    // Cancel an in-flight spin animation when the component unmounts. The
    // completion callback is then never delivered for that spin.
    {
        let spin_frame = spin_frame.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = spin_frame.borrow_mut().take() {
                    cancel_frame(id);
                }
            }
        });
    }

    // Idle wobble while hovered and not spinning
    {
        let engine = engine.clone();
        let rotation = rotation.clone();
        use_effect_with((*is_hovered, *is_spinning), move |&(hovered, spinning)| {
            engine.borrow_mut().set_hovered(hovered);

            let frame_id = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));

            if hovered && !spinning {
                let f = closure_cell.clone();
                let frame_id_inner = frame_id.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    {
                        let mut engine = engine.borrow_mut();
                        engine.idle_wobble();
                        rotation.set(engine.rotation());
                    }
                    if let Some(closure) = f.borrow().as_ref() {
                        *frame_id_inner.borrow_mut() = schedule_frame(closure);
                    }
                }) as Box<dyn FnMut()>));

                if let Some(closure) = closure_cell.borrow().as_ref() {
                    *frame_id.borrow_mut() = schedule_frame(closure);
                }
            }

            move || {
                if let Some(id) = frame_id.borrow_mut().take() {
                    cancel_frame(id);
                }
                closure_cell.borrow_mut().take();
            }
        });
    }

    let spin = {
        let engine = engine.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let spin_frame = spin_frame.clone();
        let questions = props.questions.clone();
        let on_spin_complete = props.on_spin_complete.clone();

        Callback::from(move |_| {
            // Guarded no-op while spinning or with nothing to draw from
            if !engine
                .borrow_mut()
                .start_spin(questions.len(), js_sys::Date::now(), &mut thread_rng())
            {
                return;
            }
            is_spinning.set(true);

            let engine = engine.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let spin_frame = spin_frame.clone();
            let questions = questions.clone();
            let on_spin_complete = on_spin_complete.clone();

            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let spin_frame_inner = spin_frame.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let frame = engine.borrow_mut().advance(js_sys::Date::now());
                match frame {
                    Frame::Animating { rotation: rot } => {
                        rotation.set(rot);
                        if let Some(closure) = f.borrow().as_ref() {
                            *spin_frame_inner.borrow_mut() = schedule_frame(closure);
                        }
                    }
                    Frame::Done { rotation: rot, chosen_index } => {
                        rotation.set(rot);
                        is_spinning.set(false);
                        *spin_frame_inner.borrow_mut() = None;
                        if let Some(question) = questions.get(chosen_index) {
                            on_spin_complete.emit(question.clone());
                        }
                    }
                    Frame::Idle => {}
                }
            }) as Box<dyn FnMut()>));

            if let Some(closure) = g.borrow().as_ref() {
                *spin_frame.borrow_mut() = schedule_frame(closure);
            };
        })
    };

    let on_mouse_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_| is_hovered.set(true))
    };
    let on_mouse_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_| is_hovered.set(false))
    };

    let canvas_class = if !*is_spinning && *is_hovered {
        "relative z-10 w-full max-w-[340px] h-auto transition-all duration-300 scale-[1.02]"
    } else {
        "relative z-10 w-full max-w-[340px] h-auto transition-all duration-300"
    };

    html! {
        <div class="flex flex-col items-center gap-8">
            <div
                class="relative group"
                onmouseenter={on_mouse_enter}
                onmouseleave={on_mouse_leave}
            >
                <canvas
                    ref={canvas_ref}
                    class={canvas_class}
                    style="filter: drop-shadow(0 8px 24px rgba(0, 0, 0, 0.15));"
                />
            </div>

            <button
                onclick={spin}
                disabled={*is_spinning}
                class={if *is_spinning { styles::SPIN_BUTTON_DISABLED } else { styles::SPIN_BUTTON }}
                style={if *is_spinning {
                    "background: linear-gradient(135deg, #3a3a3a 0%, #1a1a1a 100%); border: 1px solid #404040;"
                } else {
                    "background: linear-gradient(135deg, #2a2a2a 0%, #000000 100%); border: 1px solid #404040;"
                }}
            >
                <span class="relative z-10 flex items-center gap-3">
                    if *is_spinning {
                        <svg class="animate-spin h-5 w-5" viewBox="0 0 24 24" fill="none">
                            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
                            <path
                                class="opacity-75"
                                fill="currentColor"
                                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                            />
                        </svg>
                        {"Spinning..."}
                    } else {
                        {"SPIN THE WHEEL"}
                    }
                </span>
            </button>
        </div>
    }
}
