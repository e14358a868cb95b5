pub mod bases;
pub mod users;
