use iced::Task;

use crate::app::{App, AppEvent};
use crate::preferences::save_preferences;

/// Record unsaved preferences and write them unless a save is running.
pub(crate) fn request_save(app: &mut App) -> Task<AppEvent> {
    app.preferences_persist.mark_dirty();
    flush(app)
}

/// Report the outcome of a background save.
pub(crate) fn handle_saved(app: &mut App) -> Task<AppEvent> {
    log::debug!("preferences saved");
    app.preferences_persist.finish();
    flush(app)
}

pub(crate) fn handle_save_failed(
    app: &mut App,
    message: &str,
) -> Task<AppEvent> {
    log::warn!("preferences save failed: {message}");
    app.preferences_persist.finish();
    flush(app)
}

fn flush(app: &mut App) -> Task<AppEvent> {
    if !app.preferences_persist.try_begin() {
        return Task::none();
    }

    let preferences = app.preferences.clone();
    Task::perform(
        async move {
            save_preferences(&preferences).map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(()) => AppEvent::PreferencesSaved,
            Err(message) => AppEvent::PreferencesSaveFailed(message),
        },
    )
}
