pub mod color;
pub mod particle;
pub mod particle_field;
