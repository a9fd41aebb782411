use crate::core::task_list::{Filter, VisibleRow};

/// User intents routed through `update`. Row positions are rows of the
/// filtered view as rendered, never storage indices.
#[derive(Debug, Clone)]
pub enum Message {
    // Draft input
    DraftChanged(String),
    DraftSubmit,

    // Row actions
    ToggleCompleted(VisibleRow),
    BeginEdit(VisibleRow),
    MoveUp(VisibleRow),
    MoveDown(VisibleRow),

    // Delete confirmation
    RequestDelete(VisibleRow),
    ConfirmDelete,
    CancelDelete,

    // Filter
    SetFilter(Filter),
}
