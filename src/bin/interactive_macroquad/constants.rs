use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 80.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const THEORY_SAMPLES: usize = 160;
// Caps catch-up work after a long frame (window drag, breakpoint).
pub const MAX_TICKS_PER_FRAME: usize = 12;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(0.30, 0.55, 0.96, 0.55);
pub const THEORY_COLOR: Color = Color::new(0.55, 0.58, 0.62, 0.55);
pub const TRAIL_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const PROJECTILE_RADIUS_PX: f32 = 7.0;
