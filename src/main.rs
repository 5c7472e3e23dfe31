mod components;
mod config;
mod error;
mod model;
mod state;
mod util;

fn main() {
    util::init_logging();
    yew::Renderer::<components::app::App>::new().render();
}
