use cosmic::app::{Core, Task as CosmicTask};
use cosmic::{Application, Element, executor};

use crate::components;
use crate::config::TickConfig;
use crate::core::task_list::TaskList;
use crate::message::Message;
use crate::pages;

pub struct Flags {
    pub config: TickConfig,
}

pub struct Tick {
    core: Core,
    config: TickConfig,
    tasks: TaskList,
}

impl Application for Tick {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.tick.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let app = Self {
            core,
            config: flags.config,
            tasks: TaskList::new(),
        };

        (app, CosmicTask::none())
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::DraftChanged(value) => {
                self.tasks.set_draft(value);
            }

            Message::DraftSubmit => {
                self.tasks.commit_draft();
            }

            Message::ToggleCompleted(row) => {
                self.tasks.toggle_completed(row);
            }

            Message::BeginEdit(row) => {
                self.tasks.begin_edit(row);
            }

            Message::MoveUp(row) => {
                self.tasks.move_up(row);
            }

            Message::MoveDown(row) => {
                self.tasks.move_down(row);
            }

            Message::RequestDelete(row) => {
                self.tasks.request_delete(row);
            }

            Message::ConfirmDelete => {
                self.tasks.confirm_delete();
                log::debug!("task deleted, {} remaining", self.tasks.len());
            }

            Message::CancelDelete => {
                self.tasks.cancel_delete();
            }

            Message::SetFilter(filter) => {
                self.tasks.set_filter(filter);
            }
        }

        CosmicTask::none()
    }

    fn dialog(&self) -> Option<Element<'_, Message>> {
        let task_text = self.tasks.pending_delete_text()?;

        Some(components::confirm_delete::confirm_delete_dialog(
            task_text,
            Message::ConfirmDelete,
            Message::CancelDelete,
        ))
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        self.tasks.cancel_delete();
        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        pages::tasks::tasks_view(&self.tasks)
    }
}
