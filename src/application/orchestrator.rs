//! Orchestrator - Drives the conversation state machine over per-turn events
//!
//! One [`UserEvent`] in, a batch of [`SessionEvent`]s out. All mutations are
//! staged on a copy of the session and committed only when the whole turn
//! succeeds, so a mid-turn failure leaves the session in its pre-call state.

use std::sync::Arc;

use thiserror::Error;

use crate::application::events::{SessionEvent, UserEvent};
use crate::domain::conversation::{DomainError, SessionState, Turn};
use crate::domain::prompt::{
    finalize_request, image_explanation_request, modify_request, question_request,
    recommendation_request, EncodedImage,
};
use crate::ports::{CompletionClient, CompletionError, ImageError, ImageGenerator};

/// Internal failure of a single turn. Never crosses the presentation
/// boundary; rendered into [`SessionEvent::StepFailed`].
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("no finalized prompt to render")]
    NoFinalPrompt,
}

/// Conversation orchestrator.
///
/// Routes each user event through the dialogue state machine: clarifying
/// questions while the budget lasts, forced finalization once it is spent,
/// template short-circuits, image explanations, and best-effort image
/// generation over the finalized prompt.
pub struct Orchestrator<C, G> {
    completions: Arc<C>,
    images: Arc<G>,
}

impl<C, G> Orchestrator<C, G>
where
    C: CompletionClient,
    G: ImageGenerator,
{
    pub fn new(completions: Arc<C>, images: Arc<G>) -> Self {
        Self {
            completions,
            images,
        }
    }

    /// Handles one user event against the given session.
    ///
    /// Infallible at the boundary: failures come back as
    /// [`SessionEvent::StepFailed`] and the session is left untouched.
    pub async fn handle_event(
        &self,
        session: &mut SessionState,
        event: UserEvent,
    ) -> Vec<SessionEvent> {
        let mut staged = session.clone();

        match self.apply(&mut staged, event).await {
            Ok(events) => {
                *session = staged;
                events
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %session.id(),
                    error = %err,
                    "turn failed, session state unchanged"
                );
                vec![SessionEvent::StepFailed(err.to_string())]
            }
        }
    }

    async fn apply(
        &self,
        staged: &mut SessionState,
        event: UserEvent,
    ) -> Result<Vec<SessionEvent>, StepError> {
        match event {
            UserEvent::Message(text) => self.apply_message(staged, text).await,
            UserEvent::ImageUploaded { bytes, message } => {
                self.apply_image_upload(staged, &bytes, message).await
            }
            UserEvent::TemplateSelected(template) => {
                self.apply_template_selection(staged, template)
            }
            UserEvent::GenerateImageRequested => self.apply_generate_image(staged).await,
        }
    }

    /// Routes a free-form message: modification while a template is
    /// selected, re-finalization after a final prompt exists, otherwise a
    /// question round until the budget is spent.
    async fn apply_message(
        &self,
        staged: &mut SessionState,
        text: String,
    ) -> Result<Vec<SessionEvent>, StepError> {
        if let Some(template) = staged.selected_template().map(str::to_owned) {
            return self.apply_modification(staged, &template, text).await;
        }

        staged.note_follow_up_answered();
        staged.push_turn(Turn::user(&*text)?);

        if staged.dialogue_state().is_finalized() || !staged.question_budget_remaining() {
            return self.finalize_transcript(staged).await;
        }

        self.apply_question_round(staged, &text).await
    }

    /// One clarifying-question round: the question and the recommendation
    /// are two independent completions issued one after the other. A failed
    /// recommendation degrades to none; a failed question fails the turn.
    async fn apply_question_round(
        &self,
        staged: &mut SessionState,
        text: &str,
    ) -> Result<Vec<SessionEvent>, StepError> {
        let question_req = question_request(text, staged.transcript(), staged.question_count());
        let recommendation_req = recommendation_request(text, staged.transcript());

        // At most one completion in flight per session: the recommendation
        // is issued only after the question resolves.
        let question = self.completions.complete(question_req).await?;
        let recommendation = self.completions.complete(recommendation_req).await;

        let turn_index = staged.push_turn(Turn::assistant(question.content.clone())?);
        staged.note_question_asked()?;

        tracing::debug!(
            session_id = %staged.id(),
            question_count = staged.question_count(),
            "asked clarifying question"
        );

        let mut events = vec![SessionEvent::AssistantTurnAdded(question.content)];
        match recommendation {
            Ok(recommendation) => {
                staged.add_recommendation(turn_index, recommendation.content.clone());
                events.push(SessionEvent::RecommendationAdded(recommendation.content));
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %staged.id(),
                    error = %err,
                    "recommendation call failed, continuing without one"
                );
            }
        }

        Ok(events)
    }

    /// Applies the user's instruction to the selected template. The result
    /// becomes the final prompt and the template round ends.
    async fn apply_modification(
        &self,
        staged: &mut SessionState,
        template: &str,
        instruction: String,
    ) -> Result<Vec<SessionEvent>, StepError> {
        staged.push_turn(Turn::user(&*instruction)?);

        let request = modify_request(template, &instruction);
        let response = self.completions.complete(request).await?;

        staged.push_turn(Turn::assistant(response.content.clone())?);
        staged.finalize(response.content.clone())?;

        tracing::info!(session_id = %staged.id(), "template modification finalized");

        Ok(vec![
            SessionEvent::AssistantTurnAdded(response.content.clone()),
            SessionEvent::PromptFinalized(response.content),
        ])
    }

    /// Describes an uploaded image and appends the explanation as an
    /// assistant turn, always before any accompanying text. With a text
    /// message the turn finalizes over the updated transcript; the question
    /// budget is not consumed either way.
    async fn apply_image_upload(
        &self,
        staged: &mut SessionState,
        bytes: &[u8],
        message: Option<String>,
    ) -> Result<Vec<SessionEvent>, StepError> {
        let encoded = EncodedImage::from_png_bytes(bytes);
        let request = image_explanation_request(&encoded);
        let response = self.completions.complete(request).await?;

        staged.push_turn(Turn::assistant(response.content.clone())?);
        let mut events = vec![SessionEvent::AssistantTurnAdded(response.content)];

        if let Some(text) = message {
            staged.note_follow_up_answered();
            staged.push_turn(Turn::user(&*text)?);
            events.extend(self.finalize_transcript(staged).await?);
        }

        Ok(events)
    }

    /// Records the chosen template, echoing it as an assistant turn. Any
    /// in-progress question thread is abandoned.
    fn apply_template_selection(
        &self,
        staged: &mut SessionState,
        template: String,
    ) -> Result<Vec<SessionEvent>, StepError> {
        staged.select_template(template.clone())?;
        staged.push_turn(Turn::assistant(template.clone())?);

        tracing::debug!(session_id = %staged.id(), "template selected");

        Ok(vec![SessionEvent::AssistantTurnAdded(template)])
    }

    /// Finalizes over the full transcript: the response supersedes any
    /// previous final prompt.
    async fn finalize_transcript(
        &self,
        staged: &mut SessionState,
    ) -> Result<Vec<SessionEvent>, StepError> {
        let request = finalize_request(staged.transcript());
        let response = self.completions.complete(request).await?;

        staged.push_turn(Turn::assistant(response.content.clone())?);
        staged.finalize(response.content.clone())?;

        tracing::info!(session_id = %staged.id(), "prompt finalized");

        Ok(vec![
            SessionEvent::AssistantTurnAdded(response.content.clone()),
            SessionEvent::PromptFinalized(response.content),
        ])
    }

    /// Single best-effort image generation call over the finalized prompt.
    /// A failure keeps the prompt available for retry.
    async fn apply_generate_image(
        &self,
        staged: &mut SessionState,
    ) -> Result<Vec<SessionEvent>, StepError> {
        let prompt = staged
            .final_prompt()
            .ok_or(StepError::NoFinalPrompt)?
            .to_owned();

        let url = self.images.generate(&prompt).await?;
        staged.record_image_url(url.clone());

        tracing::info!(session_id = %staged.id(), "image generated");

        Ok(vec![SessionEvent::ImageReady(url)])
    }
}
