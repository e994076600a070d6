pub mod app_reducer;
pub mod change_list_reducer;
pub mod directory_picker_reducer;
pub mod session_reducer;
pub mod status_bar_reducer;
