pub mod bessel;
pub mod dynamics;
