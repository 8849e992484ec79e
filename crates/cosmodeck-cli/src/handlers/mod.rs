pub mod epochs;
pub mod tour;
