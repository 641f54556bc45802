//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row. Create DTOs live in `ovation-core` because
//! the validation pipeline is the only thing allowed to construct them.

pub mod testimonial;
