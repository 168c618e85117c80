use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Maze canvas starting up");

    maze_canvas::gui::run_gui()
}
