// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod book;
pub mod commands;
pub mod descriptor;
pub mod index;
pub mod model;
pub mod parser;
pub mod sample;
pub mod state;
pub mod validation;

pub use book::*;
pub use commands::*;
pub use descriptor::*;
pub use index::*;
pub use model::*;
pub use parser::*;
pub use sample::*;
pub use state::*;
pub use validation::*;
