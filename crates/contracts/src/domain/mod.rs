pub mod a002_organization;
pub mod common;
