pub mod dialogs;
pub mod info;
pub mod panels;
