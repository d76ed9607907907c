pub mod ease;
pub mod stagger;
pub mod tween;
