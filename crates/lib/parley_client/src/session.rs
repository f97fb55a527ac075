//! Chat session: a widget wired to a backend.
//!
//! Each submission is sent on its own task. Results come back over a single
//! channel and are applied to the widget in the order they arrive, so two
//! quick submissions may have their replies appended out of order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::client::ChatClient;
use crate::widget::{ChatWidget, InputEdit, PendingRequest, ReplyEvent, RequestId};

pub struct ChatSession {
    widget: ChatWidget,
    client: Arc<dyn ChatClient>,
    replies: mpsc::UnboundedSender<ReplyEvent>,
}

impl ChatSession {
    /// Create a session and the receiving end of its reply channel.
    ///
    /// The owner drains the receiver and passes every event to
    /// [`ChatSession::apply`].
    pub fn new(client: Arc<dyn ChatClient>) -> (Self, mpsc::UnboundedReceiver<ReplyEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            widget: ChatWidget::new(),
            client,
            replies: tx,
        };
        (session, rx)
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    pub fn edit(&mut self, edit: InputEdit) {
        self.widget.edit(edit);
    }

    pub fn select_preset(&mut self, text: &str) {
        self.widget.select_preset(text);
    }

    /// Submit the current input. Must be called within a tokio runtime.
    ///
    /// Returns `None` when the input was blank and nothing was sent.
    pub fn submit(&mut self) -> Option<RequestId> {
        let request = self.widget.submit()?;
        let id = request.id;
        self.dispatch(request);
        Some(id)
    }

    pub fn apply(&mut self, event: ReplyEvent) {
        debug!(request = %event.id, ok = event.outcome.is_ok(), "applying reply");
        self.widget.apply_reply(event);
    }

    fn dispatch(&self, request: PendingRequest) {
        let client = Arc::clone(&self.client);
        let replies = self.replies.clone();

        tokio::spawn(async move {
            let outcome = client.send(&request.prompt).await;
            if let Err(e) = &outcome {
                error!(request = %request.id, "Error communicating with the backend: {e}");
            }
            // A closed channel means the session is gone; the reply has nowhere to go.
            let _ = replies.send(ReplyEvent {
                id: request.id,
                outcome,
            });
        });
    }
}
