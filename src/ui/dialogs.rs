use crate::state::Notice;

/// Blocking native error box, like the rest of the UI it runs on the UI
/// thread.
pub fn show_error(notice: Notice) {
    log::debug!("Showing error dialog: {notice}");
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(notice.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
