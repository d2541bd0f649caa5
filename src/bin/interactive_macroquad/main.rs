use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod gameplay;
mod hud;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    app::run().await;
}
