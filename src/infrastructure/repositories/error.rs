use crate::domain::errors::DomainError;

/// Translate a driver error. Nothing is logged here; the application layer
/// logs the detail together with the operation that failed.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound("no matching row".into()),
        sqlx::Error::Database(db_err) => DomainError::Persistence(match db_err.code() {
            Some(code) => format!("{} (code {code})", db_err.message()),
            None => db_err.message().to_string(),
        }),
        other => DomainError::Persistence(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::{
        layer::{Context, Layer, SubscriberExt},
        registry,
    };

    #[derive(Clone, Default)]
    struct ErrorEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn row_not_found_is_distinct_from_persistence() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn a_store_failure_is_logged_exactly_once() {
        let events = ErrorEvents::default();
        let subscriber = registry().with(events.clone());

        let err = tracing::subscriber::with_default(subscriber, || {
            ApplicationError::from_store(
                "failed to list articles",
                map_sqlx(sqlx::Error::PoolTimedOut),
            )
        });

        assert!(matches!(
            err,
            ApplicationError::Persistence(msg) if msg == "failed to list articles"
        ));
        assert_eq!(events.0.load(Ordering::SeqCst), 1);
    }
}
