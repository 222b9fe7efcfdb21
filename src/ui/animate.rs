//! Web-Animations-API effects used by the board.
//!
//! Keyframes are built as plain JS objects. Fixed effects (jump, shake,
//! pop-up) carry their own duration; the swap translation is parameterized
//! at runtime by the bounding-box delta of the two cards trading places.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Animation, AnimationPlayState, Element};

/// Delay between successive jump starts in a selection pop sequence.
pub const JUMP_STAGGER_MS: u32 = 100;
/// Settle time after firing the shared shake animation.
pub const SHAKE_SETTLE_MS: u32 = 350;
/// Time cards stay face-down-styled while a shuffle rearranges them.
pub const SHUFFLE_SETTLE_MS: u32 = 175;

pub enum Effect {
    Jump,
    Shake,
    PopUp,
    /// Translate by a pixel delta, used for the positional swap.
    Slide { dx: f64, dy: f64 },
}

impl Effect {
    fn duration_ms(&self) -> f64 {
        match self {
            Effect::Jump => 400.0,
            Effect::Shake => 300.0,
            Effect::PopUp => 2000.0,
            Effect::Slide { .. } => 500.0,
        }
    }

    fn keyframes(&self) -> Object {
        match self {
            Effect::Jump => frames(&[
                &[("transform", "translate(0,0)")],
                &[("transform", "translate(0,-10px)")],
                &[("transform", "translate(0,0)")],
            ]),
            Effect::Shake => frames(&[
                &[("transform", "translate(0,0)")],
                &[("transform", "translate(-2px,0)")],
                &[("transform", "translate(2px,0)")],
                &[("transform", "translate(-2px,0)")],
                &[("transform", "translate(2px,0)")],
                &[("transform", "translate(-2px,0)")],
                &[("transform", "translate(0,0)")],
            ]),
            Effect::PopUp => pop_up_frames(),
            Effect::Slide { dx, dy } => {
                let end = format!("translate({dx}px,{dy}px)");
                frames(&[
                    &[("transform", "translate(0,0)")],
                    &[("transform", end.as_str())],
                ])
            }
        }
    }
}

/// Fires the effect and returns the running animation.
pub fn play(el: &Element, effect: Effect) -> Animation {
    el.animate_with_f64(Some(&effect.keyframes()), effect.duration_ms())
}

/// Fires the effect and resolves once it has finished.
pub async fn play_through(el: &Element, effect: Effect) {
    let animation = play(el, effect);
    if animation.play_state() == AnimationPlayState::Running {
        if let Ok(finished) = animation.finished() {
            let _ = JsFuture::from(finished).await;
        }
    }
}

/// Fires the effect, then waits a fixed delay rather than for completion.
/// Used to stagger overlapping per-card animations.
pub async fn play_staggered(el: &Element, effect: Effect, delay_ms: u32) {
    play(el, effect);
    TimeoutFuture::new(delay_ms).await;
}

/// The effect's completion as an awaitable future.
pub fn finished(el: &Element, effect: Effect) -> Option<JsFuture> {
    play(el, effect).finished().ok().map(JsFuture::from)
}

fn pop_up_frames() -> Object {
    let start = Object::new();
    set(&start, "opacity", &"0".into());
    set(&start, "easing", &"ease-out".into());

    let hold_in = Object::new();
    set(&hold_in, "opacity", &"1".into());
    set(&hold_in, "easing", &"ease-in".into());
    set(&hold_in, "offset", &JsValue::from_f64(0.25));

    let hold_out = Object::new();
    set(&hold_out, "opacity", &"1".into());
    set(&hold_out, "easing", &"ease-in".into());
    set(&hold_out, "offset", &JsValue::from_f64(0.75));

    let end = Object::new();
    set(&end, "opacity", &"0".into());

    let list = Array::new();
    for frame in [start, hold_in, hold_out, end] {
        list.push(&frame);
    }
    list.into()
}

fn frames(steps: &[&[(&str, &str)]]) -> Object {
    let list = Array::new();
    for step in steps {
        let frame = Object::new();
        for (key, value) in *step {
            set(&frame, key, &JsValue::from_str(value));
        }
        list.push(&frame);
    }
    list.into()
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
