//! Weekly digest batch job.
//!
//! Walks every subscriber, finds upcoming events matching their saved
//! search terms, and mails each a digest. One run, sequential, then exit;
//! scheduling is the deployment's concern (cron or equivalent).

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{EventRepository, MongoEventRepository, VisibilityPolicy};
use domain_subscribers::{MongoSubscriberRepository, SubscriberRepository};
use email::{DigestEvent, EmailProvider, SesProvider, build_digest_email};
use tracing::{error, info};

mod config;

use config::Config;

/// Outcome counts for one digest run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DigestReport {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One pass over all subscribers.
///
/// A failure for one subscriber (query or send) is logged and counted,
/// never fatal; the remaining subscribers still get their digest.
async fn run_digest<S, R, P>(
    subscribers: &S,
    events: &R,
    provider: &P,
    policy: &VisibilityPolicy,
    base_url: &str,
) -> eyre::Result<DigestReport>
where
    S: SubscriberRepository,
    R: EventRepository,
    P: EmailProvider,
{
    let now = policy.now_local();
    let all = subscribers.list().await?;
    info!(subscribers = all.len(), "Starting digest run");

    let mut report = DigestReport::default();

    for subscriber in all {
        let terms: Vec<String> = subscriber
            .search_terms
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            report.skipped += 1;
            continue;
        }

        let matches = match events.upcoming_matching(&terms, now).await {
            Ok(matches) => matches,
            Err(e) => {
                error!(email = %subscriber.email, "Digest query failed: {}", e);
                report.failed += 1;
                continue;
            }
        };
        if matches.is_empty() {
            report.skipped += 1;
            continue;
        }

        let digest: Vec<DigestEvent> = matches
            .iter()
            .map(|e| DigestEvent::new(&e.title, &e.start, &e.venue, &e.link))
            .collect();

        let message = match build_digest_email(&subscriber.email, &terms, &digest, base_url) {
            Ok(message) => message,
            Err(e) => {
                error!(email = %subscriber.email, "Digest render failed: {}", e);
                report.failed += 1;
                continue;
            }
        };

        match provider.send(&message).await {
            Ok(result) => {
                info!(email = %subscriber.email, message_id = %result.message_id, "Digest sent");
                report.sent += 1;
            }
            Err(e) => {
                error!(email = %subscriber.email, "Digest send failed: {}", e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(&config.mongodb.database);

    let subscribers = MongoSubscriberRepository::new(&db);
    let events = MongoEventRepository::new(&db);
    let provider = SesProvider::from_env().await?;

    let report = run_digest(
        &subscribers,
        &events,
        &provider,
        &config.visibility,
        &config.base_url,
    )
    .await?;

    info!(
        sent = report.sent,
        skipped = report.skipped,
        failed = report.failed,
        "Digest run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use domain_events::{CreateEvent, Event, UpdateEvent};
    use domain_subscribers::Subscriber;
    use email::MockEmailProvider;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        SubscriberRepo {}

        #[async_trait]
        impl SubscriberRepository for SubscriberRepo {
            async fn list(&self) -> domain_subscribers::Result<Vec<Subscriber>>;
        }
    }

    mock! {
        EventRepo {}

        #[async_trait]
        impl EventRepository for EventRepo {
            async fn create(&self, event: Event) -> domain_events::Result<Event>;
            async fn get_by_id(&self, id: &Uuid) -> domain_events::Result<Option<Event>>;
            async fn update(&self, id: Uuid, update: UpdateEvent) -> domain_events::Result<Event>;
            async fn delete(&self, id: Uuid) -> domain_events::Result<bool>;
            async fn search(&self, query: &str) -> domain_events::Result<Vec<Event>>;
            async fn list_all(&self) -> domain_events::Result<Vec<Event>>;
            async fn distinct_organisers(&self) -> domain_events::Result<Vec<String>>;
            async fn upcoming_matching(
                &self,
                terms: &[String],
                after: NaiveDateTime,
            ) -> domain_events::Result<Vec<Event>>;
        }
    }

    fn subscriber(email: &str, terms: &[&str]) -> Subscriber {
        Subscriber {
            email: email.to_string(),
            search_terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_event(title: &str) -> Event {
        Event::from(CreateEvent {
            title: title.to_string(),
            organisers: String::new(),
            venue: "Make It Up Club".to_string(),
            link: "https://example.org/gig".to_string(),
            start: "2025-03-14T20:30:00".parse::<NaiveDateTime>().unwrap(),
            end: "2025-03-14T23:00:00".parse::<NaiveDateTime>().unwrap(),
            tags: String::new(),
            artists: String::new(),
        })
    }

    #[tokio::test]
    async fn test_empty_terms_subscriber_is_skipped() {
        let mut subscribers = MockSubscriberRepo::new();
        subscribers
            .expect_list()
            .returning(|| Ok(vec![subscriber("quiet@example.com", &[])]));

        let mut events = MockEventRepo::new();
        events.expect_upcoming_matching().times(0);

        let provider = MockEmailProvider::new();
        let report = run_digest(
            &subscribers,
            &events,
            &provider,
            &VisibilityPolicy::default(),
            "https://gigs.example.org",
        )
        .await
        .unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_no_matches_means_no_email() {
        let mut subscribers = MockSubscriberRepo::new();
        subscribers
            .expect_list()
            .returning(|| Ok(vec![subscriber("fan@example.com", &["jazz"])]));

        let mut events = MockEventRepo::new();
        events.expect_upcoming_matching().returning(|_, _| Ok(vec![]));

        let provider = MockEmailProvider::new();
        let report = run_digest(
            &subscribers,
            &events,
            &provider,
            &VisibilityPolicy::default(),
            "https://gigs.example.org",
        )
        .await
        .unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.sent, 0);
        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_matching_subscriber_gets_digest() {
        let mut subscribers = MockSubscriberRepo::new();
        subscribers
            .expect_list()
            .returning(|| Ok(vec![subscriber("fan@example.com", &["jazz"])]));

        let mut events = MockEventRepo::new();
        events
            .expect_upcoming_matching()
            .withf(|terms, _| terms == ["jazz"])
            .returning(|_, _| Ok(vec![sample_event("Jazz Night")]));

        let provider = MockEmailProvider::new();
        let report = run_digest(
            &subscribers,
            &events,
            &provider,
            &VisibilityPolicy::default(),
            "https://gigs.example.org",
        )
        .await
        .unwrap();

        assert_eq!(report.sent, 1);
        assert!(provider.was_sent_to("fan@example.com").await);
        let sent = provider.sent_emails().await;
        let body = sent[0].body_html.as_deref().unwrap();
        assert!(body.contains("Jazz Night"));
        assert!(body.contains("unsubscribe"));
    }

    #[tokio::test]
    async fn test_send_failure_does_not_stop_the_run() {
        let mut subscribers = MockSubscriberRepo::new();
        subscribers.expect_list().returning(|| {
            Ok(vec![
                subscriber("first@example.com", &["jazz"]),
                subscriber("second@example.com", &["noise"]),
            ])
        });

        let mut events = MockEventRepo::new();
        events
            .expect_upcoming_matching()
            .times(2)
            .returning(|_, _| Ok(vec![sample_event("Jazz Night")]));

        let provider = MockEmailProvider::failing("SES unavailable");
        let report = run_digest(
            &subscribers,
            &events,
            &provider,
            &VisibilityPolicy::default(),
            "https://gigs.example.org",
        )
        .await
        .unwrap();

        assert_eq!(report.failed, 2);
        assert_eq!(report.sent, 0);
    }
}
