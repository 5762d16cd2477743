//! The facade a presentation layer drives.
//!
//! `IconStudio` wires a [`RequestOrchestrator`], an [`AssetExporter`] and a
//! [`NotificationTimer`] together. The notification mirrors the
//! orchestrator's error; when it expires or is dismissed the error is
//! cleared.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use super::exporter::{AssetExporter, ExportOutcome};
use super::notification::{DEFAULT_NOTIFICATION_TTL, NotificationTimer};
use super::orchestrator::{RequestOrchestrator, SubmitOutcome};
use crate::domain::{GeneratedIcon, GenerationRequest, GenerationSnapshot, RequestState, StudioForm};
use crate::ports::IconGenerationPort;

/// Studio tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// How long an error notification stays visible.
    pub notification_ttl: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

impl StudioConfig {
    #[must_use]
    pub const fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }
}

pub struct IconStudio {
    orchestrator: Arc<RequestOrchestrator>,
    exporter: AssetExporter,
    notification: NotificationTimer,
    form: Mutex<StudioForm>,
}

impl IconStudio {
    pub fn new(
        generator: Arc<dyn IconGenerationPort>,
        exporter: AssetExporter,
        config: StudioConfig,
    ) -> Self {
        let orchestrator = Arc::new(RequestOrchestrator::new(generator));
        let owner = Arc::downgrade(&orchestrator);
        let notification = NotificationTimer::new(config.notification_ttl, move |message| {
            if let Some(orchestrator) = owner.upgrade() {
                orchestrator.clear_error_if(message);
            }
        });

        Self {
            orchestrator,
            exporter,
            notification,
            form: Mutex::new(StudioForm::default()),
        }
    }

    pub fn current_state(&self) -> RequestState {
        self.orchestrator.current_state()
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        self.orchestrator.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationSnapshot> {
        self.orchestrator.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.orchestrator.is_loading()
    }

    pub fn form(&self) -> StudioForm {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn update_form(&self, update: impl FnOnce(&mut StudioForm)) {
        update(&mut self.form.lock().unwrap_or_else(PoisonError::into_inner));
    }

    /// Whether the generate control is enabled.
    pub fn can_submit(&self) -> bool {
        self.form().can_submit(self.is_loading())
    }

    /// Submit `request`, keeping the notification in step with the result.
    pub async fn submit(&self, request: &GenerationRequest) -> SubmitOutcome {
        let pending = match self.orchestrator.begin(request) {
            Ok(pending) => pending,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        self.sync_notification();
        let outcome = pending.resolve().await;
        self.sync_notification();
        outcome
    }

    /// Submit whatever the form currently holds.
    pub async fn generate(&self) -> SubmitOutcome {
        let request = self.form().to_request();
        self.submit(&request).await
    }

    pub async fn export_asset(&self, asset: &GeneratedIcon) -> ExportOutcome {
        self.exporter.export(asset).await
    }

    /// Export every icon currently on display.
    pub async fn export_all(&self) -> Vec<ExportOutcome> {
        let icons = self.orchestrator.icons();
        self.exporter.export_all(&icons).await
    }

    pub fn view_asset(&self, asset: &GeneratedIcon) {
        self.exporter.view(asset);
    }

    pub fn notification(&self) -> Option<String> {
        self.notification.message()
    }

    pub fn dismiss_notification(&self) {
        self.notification.dismiss();
    }

    pub fn teardown(&self) {
        self.notification.teardown();
        self.orchestrator.teardown();
    }

    fn sync_notification(&self) {
        if self.orchestrator.is_torn_down() {
            return;
        }
        self.notification.show(self.orchestrator.snapshot().error);
    }
}

impl Drop for IconStudio {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StyleId;
    use crate::ports::assets::MockAssetFetchPort;
    use crate::ports::browsing::MockBrowsingContextPort;
    use crate::ports::generation::MockIconGenerationPort;
    use crate::ports::save_surface::MockSaveSurface;
    use crate::ports::{GenerationFailure, RetrievedAsset};
    use crate::services::SubmitRejection;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    fn idle_exporter() -> AssetExporter {
        AssetExporter::new(
            Arc::new(MockAssetFetchPort::new()),
            Arc::new(MockSaveSurface::new()),
            Arc::new(MockBrowsingContextPort::new()),
        )
    }

    fn studio(generator: MockIconGenerationPort) -> IconStudio {
        IconStudio::new(Arc::new(generator), idle_exporter(), StudioConfig::default())
    }

    fn fruit() -> GenerationRequest {
        GenerationRequest::new("Fruit", vec![], StyleId(1))
    }

    async fn elapse(duration: Duration) {
        tokio::time::sleep(duration).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_shows_notification_then_expires() {
        let mut generator = MockIconGenerationPort::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(GenerationFailure::application(Some(429), "Too Many Requests")));
        let studio = studio(generator);

        studio.submit(&fruit()).await;
        assert_eq!(studio.notification().as_deref(), Some("Too Many Requests"));
        assert!(!studio.is_loading());

        elapse(DEFAULT_NOTIFICATION_TTL).await;
        assert!(studio.notification().is_none());
        let snapshot = studio.snapshot();
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.state, RequestState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_plain_failure_shows_its_description() {
        let mut generator = MockIconGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| Err(GenerationFailure::transport("API Error")));
        let studio = studio(generator);

        studio.submit(&fruit()).await;
        assert_eq!(studio.notification().as_deref(), Some("API Error"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_shows_no_notification() {
        let mut generator = MockIconGenerationPort::new();
        generator.expect_generate().returning(|_| Ok(vec![]));
        let studio = studio(generator);

        let outcome = studio.submit(&fruit()).await;
        assert_eq!(outcome, SubmitOutcome::Succeeded { count: 0 });
        assert!(studio.notification().is_none());
        assert_eq!(studio.current_state(), RequestState::Succeeded(vec![]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_clears_error_immediately() {
        let mut generator = MockIconGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| Err(GenerationFailure::transport("API Error")));
        let studio = studio(generator);
        studio.submit(&fruit()).await;

        studio.dismiss_notification();
        assert!(studio.notification().is_none());
        assert!(studio.snapshot().error.is_none());

        studio.dismiss_notification();
        elapse(Duration::from_secs(10)).await;
        assert!(studio.snapshot().error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_replaces_notification() {
        let mut generator = MockIconGenerationPort::new();
        let mut seq = mockall::Sequence::new();
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(GenerationFailure::transport("API Error")));
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![GeneratedIcon::new("apple", "http://example.com/apple.png")]));
        let studio = studio(generator);

        studio.submit(&fruit()).await;
        studio.submit(&fruit()).await;

        assert!(studio.notification().is_none());
        assert_eq!(studio.snapshot().icons.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_uses_form() {
        let mut generator = MockIconGenerationPort::new();
        generator
            .expect_generate()
            .withf(|p| p.topic == "Space" && p.colors == "#000000, #FFFFFF" && p.style == 3)
            .times(1)
            .returning(|_| Ok(vec![]));
        let studio = studio(generator);

        assert!(!studio.can_submit());
        assert_eq!(
            studio.generate().await,
            SubmitOutcome::Rejected(SubmitRejection::BlankTopic)
        );

        studio.update_form(|form| {
            form.topic = "Space".into();
            form.colors = "#000000, #FFFFFF".into();
            form.style = StyleId(3);
        });
        assert!(studio.can_submit());
        assert_eq!(studio.generate().await, SubmitOutcome::Succeeded { count: 0 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_hides_notification() {
        let mut generator = MockIconGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| Err(GenerationFailure::transport("API Error")));
        let studio = studio(generator);
        studio.submit(&fruit()).await;

        studio.teardown();
        assert!(studio.notification().is_none());
        elapse(Duration::from_secs(10)).await;
        assert_eq!(
            studio.submit(&fruit()).await,
            SubmitOutcome::Rejected(SubmitRejection::TornDown)
        );
    }

    #[tokio::test]
    async fn test_export_and_view_delegate_to_exporter() {
        let mut fetcher = MockAssetFetchPort::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok(RetrievedAsset::new(b"png".to_vec(), None)));
        let mut surface = MockSaveSurface::new();
        surface.expect_attach().returning(|_| Ok(()));
        surface
            .expect_activate()
            .returning(|t| Ok(PathBuf::from(t.filename())));
        surface.expect_detach().return_const(());
        let mut browser = MockBrowsingContextPort::new();
        browser
            .expect_open()
            .with(eq("http://example.com/apple.png"))
            .times(1)
            .returning(|_| Ok(()));

        let exporter = AssetExporter::new(Arc::new(fetcher), Arc::new(surface), Arc::new(browser));
        let studio = IconStudio::new(
            Arc::new(MockIconGenerationPort::new()),
            exporter,
            StudioConfig::default(),
        );
        let apple = GeneratedIcon::new("apple", "http://example.com/apple.png");

        let outcome = studio.export_asset(&apple).await;
        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                location: PathBuf::from("apple")
            }
        );
        studio.view_asset(&apple);
    }

    #[test]
    fn test_config_builder() {
        let config = StudioConfig::default().with_notification_ttl(Duration::from_secs(2));
        assert_eq!(config.notification_ttl, Duration::from_secs(2));
        assert_eq!(StudioConfig::default().notification_ttl, Duration::from_secs(5));
    }
}
