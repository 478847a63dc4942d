//! The `Scene` trait driven by hosts (CLI render loop, live window).
//!
//! A scene owns its precomputed state and an animation clock. The host calls
//! [`Scene::step`] once per displayed frame and [`Scene::render`] to composite
//! the current [`FrameState`] onto a surface; the scene never schedules itself.

use serde::Serialize;
use serde_json::Value;

use crate::error::HeartfieldError;
use crate::surface::Surface;

/// Per-frame animation output: the clock value and one rendered scale per
/// circle, in field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState {
    pub increment: f64,
    pub scales: Vec<f64>,
}

/// Core trait for animated scenes.
///
/// This trait is **object-safe**: hosts can hold `Box<dyn Scene>`.
pub trait Scene {
    /// Advance the animation by one frame.
    fn step(&mut self) -> Result<(), HeartfieldError>;

    /// The frame produced by the most recent `step` (or the initial frame).
    fn frame(&self) -> &FrameState;

    /// Composite the current frame onto `surface`.
    fn render(&self, surface: &mut dyn Surface) -> Result<(), HeartfieldError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use serde_json::json;

    /// Minimal scene whose single circle grows by 0.1 per step.
    struct GrowingScene {
        frame: FrameState,
    }

    impl Scene for GrowingScene {
        fn step(&mut self) -> Result<(), HeartfieldError> {
            self.frame.increment += 1.0;
            for s in &mut self.frame.scales {
                *s += 0.1;
            }
            Ok(())
        }

        fn frame(&self) -> &FrameState {
            &self.frame
        }

        fn render(&self, surface: &mut dyn Surface) -> Result<(), HeartfieldError> {
            surface.clear(Rgba::TRANSPARENT);
            Ok(())
        }

        fn params(&self) -> Value {
            json!({"rate": 0.1})
        }

        fn param_schema(&self) -> Value {
            json!({"rate": {"type": "number", "default": 0.1}})
        }
    }

    fn scene() -> GrowingScene {
        GrowingScene {
            frame: FrameState {
                increment: 0.0,
                scales: vec![0.0],
            },
        }
    }

    #[test]
    fn scene_trait_is_object_safe() {
        let mut boxed: Box<dyn Scene> = Box::new(scene());
        boxed.step().unwrap();
        assert!((boxed.frame().increment - 1.0).abs() < f64::EPSILON);
        assert!((boxed.frame().scales[0] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn params_and_schema_are_json_objects() {
        let s = scene();
        assert!(s.params().is_object());
        assert_eq!(s.param_schema()["rate"]["type"], "number");
    }

    #[test]
    fn frame_state_serializes_fields() {
        let frame = FrameState {
            increment: 0.5,
            scales: vec![0.25, 1.0],
        };
        let v = serde_json::to_value(&frame).unwrap();
        assert_eq!(v["increment"], 0.5);
        assert_eq!(v["scales"][1], 1.0);
    }
}
