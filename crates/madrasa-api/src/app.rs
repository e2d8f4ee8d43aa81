//! Application builder: wires repositories, services, and the router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::info;

use madrasa_auth::JwtDecoder;
use madrasa_cache::CacheManager;
use madrasa_core::config::AppConfig;
use madrasa_core::result::AppResult;
use madrasa_core::traits::cache::CacheProvider;
use madrasa_database::DatabasePool;
use madrasa_database::repositories::invitation::InvitationRepository;
use madrasa_database::repositories::profile::ProfileRepository;
use madrasa_database::repositories::record::RecordRepository;
use madrasa_entity::record::Record;
use madrasa_mail::ResendMailer;
use madrasa_service::adapters::LogOnlyNotifier;
use madrasa_service::traits::{InviteNotifier, ProfileLookup};
use madrasa_service::{InvitationService, RecordService, ScopeResolver};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the shared state from configuration and a connected pool.
pub fn build_state(config: AppConfig, db: &DatabasePool) -> AppResult<AppState> {
    let pool = db.pool().clone();

    info!(provider = %config.cache.provider, "Initializing list cache");
    let cache: Arc<dyn CacheProvider> = Arc::new(CacheManager::new(&config.cache)?);
    let list_ttl = Duration::from_secs(config.cache.list_ttl_seconds);

    let profiles: Arc<dyn ProfileLookup> = Arc::new(ProfileRepository::new(pool.clone()));
    let scope = Arc::new(ScopeResolver::new(Arc::clone(&profiles)));

    let notifier: Arc<dyn InviteNotifier> = if config.mail.enabled {
        info!(api_base = %config.mail.api_base, "Invitation email enabled");
        Arc::new(ResendMailer::new(config.mail.clone())?)
    } else {
        info!("Invitation email disabled");
        Arc::new(LogOnlyNotifier)
    };

    let invitation_service = InvitationService::new(
        Arc::new(InvitationRepository::new(pool.clone())),
        profiles,
        notifier,
        Arc::clone(&scope),
    );

    let jwt_decoder = JwtDecoder::new(&config.auth);

    Ok(AppState {
        expense_service: Arc::new(record_service(db, &scope, &cache, list_ttl)),
        income_service: Arc::new(record_service(db, &scope, &cache, list_ttl)),
        staff_service: Arc::new(record_service(db, &scope, &cache, list_ttl)),
        invitation_service: Arc::new(invitation_service),
        database: Some(db.clone()),
        cache,
        jwt_decoder: Arc::new(jwt_decoder),
        config: Arc::new(config),
    })
}

fn record_service<R: Record>(
    db: &DatabasePool,
    scope: &Arc<ScopeResolver>,
    cache: &Arc<dyn CacheProvider>,
    list_ttl: Duration,
) -> RecordService<R> {
    RecordService::new(
        Arc::new(RecordRepository::<R>::new(db.pool().clone())),
        Arc::clone(scope),
        Arc::clone(cache),
        list_ttl,
    )
}
