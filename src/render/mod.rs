pub mod raster;
pub mod renderer;

pub use raster::{Raster, rasterize};
pub use renderer::{Renderer, fit_board};
