//! Page and overlay state

mod forms;
mod input;
mod lists;
mod modal;
mod settings;
mod task;

pub use forms::{EditableForm, FieldEdit, FieldValue, FormDialog, FormField, RestoreChoice};
pub use input::{FilterInput, FilterKind};
pub use lists::{FacetCycle, ListsState, PageList};
pub use modal::{Modal, ModalState};
pub use settings::{
    close_behavior_label, day_boundary_label, SettingItem, SettingSection, SettingsState,
};
pub use task::{RunningTask, TaskJob};
