//! Decorative Motion
//!
//! Pure functions of elapsed time or pointer position. Nothing here touches
//! application state.

// ========================
// Floating shapes
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Torus,
}

impl ShapeKind {
    pub fn class(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "shape sphere",
            ShapeKind::Cube => "shape cube",
            ShapeKind::Torus => "shape torus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub position: [f64; 3],
    pub kind: ShapeKind,
}

pub const FLOATING_SHAPES: [FloatingShape; 5] = [
    FloatingShape { position: [-2.0, 1.0, -1.0], kind: ShapeKind::Sphere },
    FloatingShape { position: [2.0, -1.0, -2.0], kind: ShapeKind::Cube },
    FloatingShape { position: [0.0, 2.0, -1.5], kind: ShapeKind::Torus },
    FloatingShape { position: [-1.5, -2.0, -1.0], kind: ShapeKind::Sphere },
    FloatingShape { position: [1.5, 1.5, -2.0], kind: ShapeKind::Cube },
];

/// Screen percent per scene unit when projecting shapes onto the page
const SCENE_SCALE_PCT: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePose {
    /// Radians
    pub rot_x: f64,
    /// Radians
    pub rot_y: f64,
    pub y: f64,
}

pub fn shape_pose(shape: &FloatingShape, elapsed_secs: f64) -> ShapePose {
    let [x, y, _] = shape.position;
    ShapePose {
        rot_x: (elapsed_secs + x).sin() * 0.3,
        rot_y: (elapsed_secs + y).sin() * 0.2,
        y: y + (elapsed_secs + x).sin() * 0.1,
    }
}

/// Inline CSS placing a shape at its pose
pub fn shape_style(shape: &FloatingShape, elapsed_secs: f64) -> String {
    let pose = shape_pose(shape, elapsed_secs);
    let [x, _, z] = shape.position;
    let left = 50.0 + x * SCENE_SCALE_PCT;
    let top = 50.0 - pose.y * SCENE_SCALE_PCT;
    // Further shapes render smaller
    let scale = 1.0 / (1.0 - z * 0.25);
    format!(
        "left: {:.2}%; top: {:.2}%; transform: rotateX({:.4}rad) rotateY({:.4}rad) scale({:.3});",
        left, top, pose.rot_x, pose.rot_y, scale
    )
}

// ========================
// Pointer follower
// ========================

/// Half the follower's size, so it centres on the pointer
pub const FOLLOWER_OFFSET_PX: f64 = 25.0;

pub fn follower_style(x: f64, y: f64, hovering: bool) -> String {
    let (scale, rotate) = if hovering { (1.5, 180) } else { (1.0, 0) };
    format!(
        "transform: translate({:.1}px, {:.1}px) scale({}) rotate({}deg);",
        x - FOLLOWER_OFFSET_PX,
        y - FOLLOWER_OFFSET_PX,
        scale,
        rotate
    )
}

/// Expanding ring centred on the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub half_size_px: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

pub const RIPPLES: [Ripple; 2] = [
    Ripple { half_size_px: 50.0, duration_secs: 1.5, delay_secs: 0.0 },
    Ripple { half_size_px: 75.0, duration_secs: 2.0, delay_secs: 0.5 },
];

pub fn ripple_style(ripple: &Ripple, x: f64, y: f64) -> String {
    format!(
        "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {}s;",
        x - ripple.half_size_px,
        y - ripple.half_size_px,
        ripple.half_size_px * 2.0,
        ripple.half_size_px * 2.0,
        ripple.duration_secs,
        ripple.delay_secs
    )
}

/// Dots pulsing behind the pointer, each nudged down-right of the last
pub const TRAIL_DOTS: usize = 3;
const TRAIL_OFFSET_PX: f64 = 15.0;
const TRAIL_STEP_PX: f64 = 5.0;

pub fn trail_dot_style(index: usize, x: f64, y: f64) -> String {
    let i = index as f64;
    let shift = TRAIL_STEP_PX * i - TRAIL_OFFSET_PX;
    format!(
        "left: {:.1}px; top: {:.1}px; --peak-opacity: {:.1}; animation-delay: {:.1}s;",
        x + shift,
        y + shift,
        0.3 - i * 0.1,
        i * 0.1
    )
}

// ========================
// Typewriter
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self { type_ms: 150, delete_ms: 100, hold_ms: 2000 }
    }
}

/// Visible prefix of the current text after `elapsed_ms`.
///
/// Each text is typed, held fully visible, deleted, then the next begins.
pub fn typewriter_frame(texts: &[String], timing: TypewriterTiming, elapsed_ms: u64) -> String {
    let cycle = |text: &String| {
        let n = text.chars().count() as u64;
        n * timing.type_ms + timing.hold_ms + n * timing.delete_ms
    };
    let total: u64 = texts.iter().map(cycle).sum();
    if total == 0 {
        return String::new();
    }

    let mut t = elapsed_ms % total;
    for text in texts {
        let len = cycle(text);
        if t >= len {
            t -= len;
            continue;
        }
        let n = text.chars().count() as u64;
        let typing = n * timing.type_ms;
        let shown = if t < typing {
            t / timing.type_ms.max(1)
        } else if t < typing + timing.hold_ms {
            n
        } else {
            let deleted = (t - typing - timing.hold_ms) / timing.delete_ms.max(1);
            n.saturating_sub(deleted + 1)
        };
        return text.chars().take(shown as usize).collect();
    }
    String::new()
}

// ========================
// Text reveal
// ========================

pub const REVEAL_STAGGER_SECS: f64 = 0.12;

/// Words paired with their CSS animation delay
pub fn reveal_words(text: &str, delay_secs: f64) -> Vec<(String, f64)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| (word.to_string(), delay_secs + i as f64 * REVEAL_STAGGER_SECS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        vec!["Dev".to_string(), "UX".to_string()]
    }

    #[test]
    fn test_shape_pose_at_zero() {
        let shape = FLOATING_SHAPES[0];
        let pose = shape_pose(&shape, 0.0);
        assert!((pose.rot_x - (-2.0f64).sin() * 0.3).abs() < 1e-12);
        assert!((pose.rot_y - 1.0f64.sin() * 0.2).abs() < 1e-12);
        assert!((pose.y - (1.0 + (-2.0f64).sin() * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_shape_bob_is_bounded() {
        for shape in FLOATING_SHAPES.iter() {
            for step in 0..200 {
                let pose = shape_pose(shape, step as f64 * 0.1);
                assert!((pose.y - shape.position[1]).abs() <= 0.1 + 1e-12);
                assert!(pose.rot_x.abs() <= 0.3 + 1e-12);
            }
        }
    }

    #[test]
    fn test_follower_centres_on_pointer() {
        assert_eq!(
            follower_style(100.0, 40.0, false),
            "transform: translate(75.0px, 15.0px) scale(1) rotate(0deg);"
        );
        assert!(follower_style(0.0, 0.0, true).contains("scale(1.5)"));
    }

    #[test]
    fn test_ripples_centre_on_pointer() {
        assert_eq!(
            ripple_style(&RIPPLES[0], 100.0, 60.0),
            "left: 50.0px; top: 10.0px; width: 100px; height: 100px; animation-duration: 1.5s; animation-delay: 0s;"
        );
        assert!(ripple_style(&RIPPLES[1], 100.0, 60.0).starts_with("left: 25.0px; top: -15.0px;"));
    }

    #[test]
    fn test_trail_dots_step_and_fade() {
        let styles: Vec<String> = (0..TRAIL_DOTS).map(|i| trail_dot_style(i, 100.0, 100.0)).collect();
        assert_eq!(styles[0], "left: 85.0px; top: 85.0px; --peak-opacity: 0.3; animation-delay: 0.0s;");
        assert_eq!(styles[1], "left: 90.0px; top: 90.0px; --peak-opacity: 0.2; animation-delay: 0.1s;");
        assert_eq!(styles[2], "left: 95.0px; top: 95.0px; --peak-opacity: 0.1; animation-delay: 0.2s;");
    }

    #[test]
    fn test_typewriter_types_holds_and_deletes() {
        let t = TypewriterTiming::default();
        let texts = roles();
        assert_eq!(typewriter_frame(&texts, t, 0), "");
        assert_eq!(typewriter_frame(&texts, t, 150), "D");
        assert_eq!(typewriter_frame(&texts, t, 449), "De");
        assert_eq!(typewriter_frame(&texts, t, 450), "Dev");
        assert_eq!(typewriter_frame(&texts, t, 2449), "Dev");
        // deleting: first char removed immediately after the hold
        assert_eq!(typewriter_frame(&texts, t, 2450), "De");
        assert_eq!(typewriter_frame(&texts, t, 2650), "");
        // second text starts after 450 + 2000 + 300
        assert_eq!(typewriter_frame(&texts, t, 2750 + 150), "U");
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let t = TypewriterTiming::default();
        let texts = roles();
        let total = 2750 + (300 + 2000 + 200);
        assert_eq!(typewriter_frame(&texts, t, total + 450), "Dev");
        assert_eq!(typewriter_frame(&[], t, 1000), "");
    }

    #[test]
    fn test_reveal_words_stagger() {
        let words = reveal_words("Hi,  I'm here", 0.5);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], ("Hi,".to_string(), 0.5));
        assert!((words[2].1 - 0.74).abs() < 1e-9);
    }
}
