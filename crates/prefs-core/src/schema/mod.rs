//! Schema descriptors and the generic hydrator that consumes them.

pub mod descriptor;
pub mod hydrate;

pub use descriptor::{Field, Schema, Shape};
pub use hydrate::{
    hydrate, hydrate_as, hydrate_list_as, hydrate_raw, HydrateMode, Hydrated, Instance, Schematic,
};
