pub mod entries;
pub mod forms;
pub mod users;
