use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{distance, init_logging, set_panic_hook};

/// Navigation graph of the currently exported floor(s), owned by the JS side.
#[wasm_bindgen]
pub struct NavGraph {
    pub(crate) inner: navgraph::Graph,
}

impl NavGraph {
    pub fn rs_new() -> NavGraph { NavGraph { inner: navgraph::Graph::new() } }
}
