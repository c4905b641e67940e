pub mod consts;
pub mod edges;
pub mod error;
pub mod filters;
pub mod focus;
pub mod frame;
pub mod io;
pub mod mask;
pub mod overlay;
pub mod params;
pub mod pipeline;
pub mod prepare;
