use std::rc::Rc;

use tracing::{debug, error, info};

use crate::api::AssistantApi;
use crate::markup::emphasize;
use crate::models::{GenerationRequest, GenerationResult};
use crate::view::View;

pub const GENERATION_FAILED_NOTICE: &str = "Failed to generate blog.";

/// Drives the one-shot blog generation and its loading/disabled state.
pub struct ContentGenerator<A> {
    api: Rc<A>,
    view: View,
}

impl<A> Clone for ContentGenerator<A> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), view: self.view.clone() }
    }
}

/// Leaves the pending state when dropped, whichever way the call ended.
struct PendingGuard<'a> {
    view: &'a View,
}

impl<'a> PendingGuard<'a> {
    fn enter(view: &'a View) -> Self {
        view.update(|m| {
            m.generator.result_visible = false;
            m.generator.pending = true;
        });
        Self { view }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.view.update(|m| m.generator.pending = false);
    }
}

impl<A: AssistantApi> ContentGenerator<A> {
    pub fn new(api: Rc<A>, view: View) -> Self {
        Self { api, view }
    }

    /// Mirrors the topic field.
    pub fn set_topic(&self, value: impl Into<String>) {
        let value = value.into();
        self.view.update(|m| m.generator.topic = value);
    }

    /// Generates for whatever is in the topic field.
    pub async fn generate_from_input(&self) {
        let topic = self.view.read(|m| m.generator.topic.clone());
        self.generate(&topic).await;
    }

    /// Only an empty topic is ignored; whitespace is sent as typed. Calls are
    /// not serialised: the first one to settle clears the pending state.
    pub async fn generate(&self, topic: &str) {
        if topic.is_empty() {
            return;
        }

        let _pending = PendingGuard::enter(&self.view);
        let request = GenerationRequest { topic: topic.to_string() };
        debug!("Requesting generation for topic '{}'", request.topic);

        match self.api.generate(&request).await {
            Ok(response) => {
                info!("Generated {} chars for topic '{}'", response.content.len(), request.topic);
                let result = GenerationResult {
                    topic: request.topic,
                    content: emphasize(&response.content),
                };
                self.view.update(|m| {
                    m.generator.result = Some(result);
                    m.generator.result_visible = true;
                });
            }
            Err(e) => {
                error!("Generation failed for topic '{}': {e}", request.topic);
                self.view
                    .update(|m| m.notices.push_back(GENERATION_FAILED_NOTICE.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::errors::AppError;
    use crate::markup::Span;
    use crate::models::GenerationResponse;
    use crate::test_support::{init_tracing, ScriptedApi};
    use crate::view::render::render;
    use crate::view::GenerationPhase;

    fn generator() -> (Rc<ScriptedApi>, View, ContentGenerator<ScriptedApi>) {
        init_tracing();
        let api = Rc::new(ScriptedApi::default());
        let view = View::new();
        let generator = ContentGenerator::new(api.clone(), view.clone());
        (api, view, generator)
    }

    /// Records every pending -> idle transition seen by the view.
    fn settlements(view: &View) -> Rc<RefCell<Vec<bool>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let last = RefCell::new(view.read(|m| m.generator.pending));
        view.subscribe(move |m| {
            let mut was = last.borrow_mut();
            if *was && !m.generator.pending {
                sink.borrow_mut().push(m.generator.result_visible);
            }
            *was = m.generator.pending;
        });
        log
    }

    #[tokio::test]
    async fn empty_topic_is_ignored() {
        let (api, view, generator) = generator();
        let before = view.snapshot();

        generator.generate("").await;
        generator.generate_from_input().await;

        assert_eq!(view.snapshot(), before);
        assert!(api.generate_requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn whitespace_topic_is_sent() {
        let (api, _view, generator) = generator();
        api.generated("text");

        generator.generate(" ").await;

        assert_eq!(api.generate_requests.borrow()[0].topic, " ");
    }

    #[tokio::test]
    async fn pending_state_while_in_flight() {
        let (api, view, generator) = generator();
        let reply = api.expect_generate();

        let call = generator.generate("Sahara camps");
        let observe = async {
            tokio::task::yield_now().await;
            let during = render(&view.snapshot()).generator;
            let _ = reply.send(Ok(GenerationResponse { content: "Dunes.".into() }));
            during
        };
        let ((), during) = tokio::join!(call, observe);

        assert!(during.loading_visible);
        assert!(during.button_disabled);
        assert!(!during.result_visible);

        let after = render(&view.snapshot()).generator;
        assert!(!after.loading_visible);
        assert!(!after.button_disabled);
        assert!(after.result_visible);
        assert_eq!(after.result, Some(vec![Span::Plain("Dunes.".into())]));
    }

    #[tokio::test]
    async fn pending_is_shown_before_request_is_issued() {
        let (api, view, generator) = generator();
        api.observe(view.clone());
        api.generated("ok");

        generator.generate("Ouarzazate").await;

        assert_eq!(api.pending_at_generate_call.borrow().as_slice(), &[true]);
        assert!(!view.read(|m| m.generator.pending));
    }

    #[tokio::test]
    async fn success_replaces_previous_result() {
        let (api, view, generator) = generator();
        api.generated("first post");
        api.generated("**second** post");

        generator.set_topic("Chefchaouen");
        generator.generate_from_input().await;
        generator.generate_from_input().await;

        let rendered = render(&view.snapshot()).generator;
        assert_eq!(
            rendered.result,
            Some(vec![Span::Strong("second".into()), Span::Plain(" post".into())])
        );
        assert_eq!(view.read(|m| m.generator.phase()), GenerationPhase::Showing);
        assert_eq!(
            api.generate_requests.borrow().as_slice(),
            &[
                GenerationRequest { topic: "Chefchaouen".into() },
                GenerationRequest { topic: "Chefchaouen".into() },
            ]
        );
    }

    #[tokio::test]
    async fn cleanup_runs_once_on_success() {
        let (api, view, generator) = generator();
        let log = settlements(&view);
        api.generated("ok");

        generator.generate("Atlas").await;

        assert_eq!(log.borrow().as_slice(), &[true]);
    }

    #[tokio::test]
    async fn failure_notifies_once_and_hides_result() {
        let (api, view, generator) = generator();
        api.generated("old post");
        generator.generate("Essaouira").await;

        let log = settlements(&view);
        api.generate_failure(AppError::ServerStatus { status: 500 });
        generator.generate("Essaouira").await;

        assert_eq!(log.borrow().as_slice(), &[false]);
        assert_eq!(view.take_notices(), vec![GENERATION_FAILED_NOTICE.to_string()]);
        let rendered = render(&view.snapshot()).generator;
        assert!(!rendered.result_visible);
        assert!(!rendered.loading_visible);
        assert!(!rendered.button_disabled);
        assert_eq!(view.read(|m| m.generator.phase()), GenerationPhase::Idle);
    }

    #[tokio::test]
    async fn decode_failure_also_cleans_up() {
        let (api, view, generator) = generator();
        let log = settlements(&view);
        api.generate_failure(AppError::decode("missing field `content`"));

        generator.generate("Rabat").await;

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(view.read(|m| m.notices.len()), 1);
        assert_eq!(view.read(|m| m.generator.result.clone()), None);
    }

    #[tokio::test]
    async fn dropping_an_in_flight_call_still_cleans_up() {
        let (api, view, generator) = generator();
        let _reply = api.expect_generate();

        {
            let mut call = Box::pin(generator.generate("Tangier"));
            let polled = tokio::time::timeout(std::time::Duration::from_millis(10), &mut call).await;
            assert!(polled.is_err());
            assert!(view.read(|m| m.generator.pending));
        }

        assert!(!view.read(|m| m.generator.pending));
    }

    #[tokio::test]
    async fn reentrant_calls_are_not_serialised() {
        let (api, view, generator) = generator();
        let first = api.expect_generate();
        let second = api.expect_generate();

        let a = generator.generate("Fes");
        let b = generator.generate("Meknes");
        let driver = async {
            tokio::task::yield_now().await;
            let _ = first.send(Ok(GenerationResponse { content: "Fes post".into() }));
            while view.read(|m| m.generator.result.is_none()) {
                tokio::task::yield_now().await;
            }
            // First settlement already cleared pending although the second is in flight.
            let cleared = !view.read(|m| m.generator.pending);
            let _ = second.send(Ok(GenerationResponse { content: "Meknes post".into() }));
            cleared
        };
        let ((), (), cleared) = tokio::join!(a, b, driver);

        assert!(cleared);
        assert_eq!(
            view.read(|m| m.generator.result.as_ref().map(|r| r.topic.clone())),
            Some("Meknes".to_string())
        );
    }
}
