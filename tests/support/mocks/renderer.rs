// tests/support/mocks/renderer.rs
use std::sync::Mutex;

use web_sugar::application::error::{ApplicationError, ApplicationResult};
use web_sugar::application::ports::templates::{Context, TemplateRenderer};

/// Records every render call and answers `rendered:<template>`.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<(String, Context)>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, Context)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(String, Context)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render_to_string(&self, template: &str, context: &Context) -> ApplicationResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((template.to_string(), context.clone()));
        Ok(format!("rendered:{template}"))
    }
}

/// Knows no templates at all.
pub struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render_to_string(&self, template: &str, _context: &Context) -> ApplicationResult<String> {
        Err(ApplicationError::template(format!("template '{template}' not found")))
    }
}
