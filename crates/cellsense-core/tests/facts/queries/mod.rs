//! Consumer query tests, one module per query.

mod appearance;
mod coordinates;
mod states;
mod value;
