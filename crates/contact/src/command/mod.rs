use std::sync::Arc;

use crate::SubmissionSink;

mod submit_form;

#[derive(Clone)]
pub struct Command {
    sink: Arc<dyn SubmissionSink>,
}

impl Command {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new(Arc::new(crate::LogSink))
    }
}
