pub mod listing;
pub mod model;
pub mod node;
pub mod render;

pub use listing::{CountryFilter, PlaceListView};
pub use node::{el, text, Element, ElementBuilder, Node};
pub use render::{render_place_detail, render_place_list, render_reviews};
