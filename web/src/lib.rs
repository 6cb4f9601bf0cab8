use clap::Parser;
use gloo::utils::{document, window};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

/// Options read from the page URL, e.g. `#--seed=42&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        // the leading empty segment stands in for the program name
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let hash = window().location().hash().unwrap_or_default();
    let args = Args::from_location_hash(&hash).expect("Could not parse args");
    if let Some(level) = args.verbose.log_level() {
        console_log::init_with_level(level).expect("Error initializing logger");
    }

    document().set_title(memgrid_core::WINDOW_TITLE);
    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("mounting board, seed: {:?}", args.game.seed);
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
