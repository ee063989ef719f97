mod errors;
mod model;
mod persist;
mod storage;

pub(crate) use model::Preferences;
pub(crate) use persist::PersistState;
pub(crate) use storage::{
    PreferencesLoadStatus, load_preferences, save_preferences,
};
