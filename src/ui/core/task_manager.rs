use super::actions::Action;
use crate::service::DeletionService;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// Spawns and tracks background operations, reporting their outcome to the
/// UI over an unbounded action channel.
///
/// The only operation this application spawns is the deletion request; the
/// phase guard in the panel keeps it to at most one in flight.
pub struct TaskManager {
    tasks: HashMap<TaskId, JoinHandle<()>>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the background deletion request. Sends `DeletionScheduled` or
    /// `DeletionFailed` when the service settles.
    pub fn spawn_deletion(
        &mut self,
        service: Arc<dyn DeletionService>,
        account_email: String,
        reason: String,
    ) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match service.request_account_deletion(&account_email, &reason).await {
                Ok(receipt) => {
                    log::info!("deletion scheduled, request id {}", receipt.request_id);
                    let _ = action_sender.send(Action::DeletionScheduled(receipt));
                }
                Err(e) => {
                    log::error!("deletion request failed: {}", e);
                    let _ = action_sender.send(Action::DeletionFailed(e.to_string()));
                }
            }
        });

        self.tasks.insert(task_id, handle);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, handle)| handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
