use ballistic_rust::core::analytical::sample_trajectory;
use ballistic_rust::core::predict;
use ballistic_rust::core::window::fit_paths;
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PREVIEW_COLOR, PROJECTILE_RADIUS_PX, RIGHT_MARGIN, THEORY_COLOR,
    THEORY_SAMPLES, TOP_MARGIN, TRAIL_COLOR, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_active_flight};
use crate::hud::draw_hud;
use crate::render::{PlotArea, draw_axes, draw_path, draw_projectile, draw_velocity_arrow};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "BallisticRust Interactive".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!(%err, path = UI_FONT_PATH, "falling back to default font");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_active_flight(&mut state, frame_dt);

        let params = state.controls.params();
        let prediction = if state.show_preview && !state.is_flying() {
            predict(&params, &state.controls.config()).ok()
        } else {
            None
        };
        let theory = sample_trajectory(
            params.speed_mps,
            params.angle_deg,
            params.gravity_mps2,
            THEORY_SAMPLES,
        );

        let preview_points = prediction.as_ref().map_or(&[][..], |p| p.points.as_slice());
        let trail = state.flight.as_ref().map_or(&[][..], |f| f.trajectory());
        let (world_max_x, world_max_y) = fit_paths(&[preview_points, trail, theory.as_slice()]);
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
            world_max_x: world_max_x as f32,
            world_max_y: world_max_y as f32,
        };

        clear_background(BACKGROUND);
        draw_axes(&area, GRID_COLOR, ui_font.as_ref());

        if state.show_preview {
            draw_path(&area, &theory, 1.5, THEORY_COLOR);
            draw_path(&area, preview_points, 2.0, PREVIEW_COLOR);
        }

        if let Some(flight) = &state.flight {
            draw_path(&area, trail, 3.0, TRAIL_COLOR);
            let position = flight.state().position();
            if let Some(&last) = trail.last() {
                draw_path(&area, &[last, position], 3.0, TRAIL_COLOR);
            }
            draw_projectile(&area, position, PROJECTILE_RADIUS_PX);
            if flight.is_flying() {
                draw_velocity_arrow(&area, position, flight.velocity_angle_rad(), flight.speed());
            }
        }

        draw_hud(&state, prediction.as_ref(), &area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
