use cosmic::widget::{button, dialog};
use cosmic::Element;

use crate::fl;
use crate::message::Message;

/// Modal confirmation shown before a task is deleted. Stateless: the caller
/// owns the pending-deletion state, and dismisses the dialog by clearing it
/// after whichever action fires.
pub fn confirm_delete_dialog(
    task_text: &str,
    on_confirm: Message,
    on_cancel: Message,
) -> Element<'static, Message> {
    dialog()
        .title(fl!("delete-title"))
        .body(fl!("delete-body", task = task_text))
        .primary_action(button::destructive(fl!("delete-confirm")).on_press(on_confirm))
        .secondary_action(button::standard(fl!("delete-cancel")).on_press(on_cancel))
        .into()
}
