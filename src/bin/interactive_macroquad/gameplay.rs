use crate::constants::MAX_TICKS_PER_FRAME;
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }

    state.sync_controls();

    if actions.launch && !state.is_flying() {
        state.launch();
    }
}

/// Feeds the flight whole ticks of logical time. Frame rate only changes how
/// often ticks run, never their length.
pub(crate) fn step_active_flight(state: &mut AppRuntime, frame_dt: f32) {
    let Some(flight) = state.flight.as_mut() else {
        return;
    };
    if !flight.is_flying() {
        return;
    }

    let dt = flight.config().dt_s as f32;
    state.tick_backlog_s += frame_dt * state.sim_speed;

    let mut ticks = 0;
    while state.tick_backlog_s >= dt && ticks < MAX_TICKS_PER_FRAME && flight.is_flying() {
        flight.update();
        state.tick_backlog_s -= dt;
        ticks += 1;
    }
    state.tick_backlog_s = state.tick_backlog_s.min(dt);

    if let Some(range) = flight.range_m() {
        state.status_line = format!("Landed at {:.2} m after {:.2} s", range, flight.time_s());
        state.tick_backlog_s = 0.0;
    }
}
