pub(crate) mod encode;
pub(crate) mod raster;
