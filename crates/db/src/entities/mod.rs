//! `SeaORM` entity definitions.

pub mod companies;
pub mod entries;
