use std::sync::Mutex;

use crate::services::ai::{LlmProvider, Message};
use crate::services::engine::BookingEngine;

pub struct AppState {
    /// Engine behind a mutex: the booking API holds the lock across its
    /// availability check and create so the check-then-act pair is atomic
    /// within the process. Never held across an await.
    pub engine: Mutex<BookingEngine>,
    pub llm: Box<dyn LlmProvider>,
    /// Shared conversation transcript, process lifetime.
    pub transcript: Mutex<Vec<Message>>,
}
