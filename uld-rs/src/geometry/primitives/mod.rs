mod cuboid;
mod dims;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use dims::Dims;
