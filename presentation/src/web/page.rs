//! HTML page rendering

use ask_domain::ProgressEvent;
use minijinja::{Environment, context};

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the single page of the display surface.
///
/// Templates ending in `.html` are auto-escaped, so questions, events and
/// answers are safe to interpolate.
pub struct PageRenderer {
    env: Environment<'static>,
    title: String,
}

impl PageRenderer {
    pub fn new(title: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("templates/index.html"))?;
        Ok(Self {
            env,
            title: title.into(),
        })
    }

    /// The page with an empty input and no output.
    pub fn render_idle(&self) -> Result<String, minijinja::Error> {
        self.render("", &[], None)
    }

    /// The page after a submission: the event feed, then the answer.
    pub fn render_answer(
        &self,
        question: &str,
        events: &[ProgressEvent],
        answer: &str,
    ) -> Result<String, minijinja::Error> {
        self.render(question, events, Some(answer))
    }

    fn render(
        &self,
        question: &str,
        events: &[ProgressEvent],
        answer: Option<&str>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(context! {
            title => self.title,
            question => question,
            events => events,
            answer => answer,
        })
    }
}
