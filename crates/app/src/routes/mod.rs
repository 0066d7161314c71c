pub mod not_found;
pub mod predict;

use dioxus::prelude::*;

use not_found::NotFound;
use predict::Predict;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Predict {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
