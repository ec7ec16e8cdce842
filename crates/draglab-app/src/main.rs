//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting DragLab");

    pollster::block_on(draglab_app::App::run());
}
