//! One-shot console surface

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ConsoleProgress, SimpleProgress};
use ask_application::{ProgressNotifier, RunChainError, RunChainUseCase};
use ask_domain::Question;
use tracing::debug;

/// Run the chain once for `question` and return the formatted answer.
///
/// An empty question does nothing and returns `None`.
pub async fn ask_once(
    chain: &RunChainUseCase,
    question: &str,
    quiet: bool,
) -> Result<Option<String>, RunChainError> {
    let Some(question) = Question::try_new(question) else {
        debug!("Ignoring empty question");
        return Ok(None);
    };

    let answer = if quiet {
        chain.run(question.content(), None).await?
    } else if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        let progress = ConsoleProgress::new();
        let result = run_observed(chain, &question, &progress).await;
        progress.finish();
        result?
    } else {
        run_observed(chain, &question, &SimpleProgress).await?
    };

    Ok(Some(ConsoleFormatter::format_answer(&answer)))
}

async fn run_observed(
    chain: &RunChainUseCase,
    question: &Question,
    progress: &dyn ProgressNotifier,
) -> Result<String, RunChainError> {
    chain.run(question.content(), Some(progress)).await
}
