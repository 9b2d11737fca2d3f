/// Core types: remote locations, VCS kinds, local roots and working copies
pub mod entities;
pub mod value_objects;
