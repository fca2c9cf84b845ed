pub mod labeler;
pub mod recolor;

pub use labeler::{label_all, Palette};
pub use recolor::{recolor_all, recolor_region};
