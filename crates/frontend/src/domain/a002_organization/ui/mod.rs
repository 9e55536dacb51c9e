pub mod create_form;
pub mod list;
