// tests/resolution_service_unit.rs
use std::sync::Arc;

mod support;

use support::{ANA_ID, Call, HIIT_ID, RecordingCatalog, program, sport, trainer};
use trainer_market_core::application::resolution::{
    EntityResolver, ProgramResolver, Resolution, SlugResolutionService, SportResolver,
};
use trainer_market_core::domain::catalog::{Collection, EntityKind, generate_seo_url};

fn service(catalog: &Arc<RecordingCatalog>) -> SlugResolutionService {
    SlugResolutionService::new(Arc::clone(catalog) as _)
}

#[test]
fn default_priority_is_trainer_sport_program() {
    let catalog = Arc::new(RecordingCatalog::new());
    let service = service(&catalog);
    assert_eq!(
        service.slug_priority(),
        vec![EntityKind::Trainer, EntityKind::Sport, EntityKind::Program]
    );
    assert_eq!(
        service.id_priority(),
        vec![EntityKind::Trainer, EntityKind::Program]
    );
}

#[tokio::test]
async fn uuid_matching_trainer_skips_slug_resolvers() {
    let catalog = Arc::new(
        RecordingCatalog::new().with(Collection::Profiles, trainer(ANA_ID, "ana-costa")),
    );
    let service = service(&catalog);

    let result = service
        .resolve_by_slug_or_id(ANA_ID)
        .await
        .expect("trainer should resolve by id");

    assert_eq!(result.kind, EntityKind::Trainer);
    assert_eq!(result.slug, "ana-costa");
    assert_eq!(generate_seo_url(&result), "/trainers/ana-costa");
    assert_eq!(catalog.calls(), vec![Call::Lookup(Collection::Profiles, "id")]);
}

#[tokio::test]
async fn sport_shadows_program_with_same_slug() {
    let catalog = Arc::new(
        RecordingCatalog::new()
            .with(Collection::Sports, sport("s-1", "crossfit"))
            .with(Collection::Programs, program("p-1", Some("crossfit"), "published")),
    );
    let service = service(&catalog);

    let result = service.resolve_slug("crossfit").await.expect("should resolve");
    assert_eq!(result.kind, EntityKind::Sport);
    assert_eq!(result.id.as_str(), "s-1");

    // the program resolver is never consulted once the sport matches
    assert_eq!(
        catalog.calls(),
        vec![
            Call::Lookup(Collection::Profiles, "slug"),
            Call::Sport("crossfit".into()),
        ]
    );
}

#[tokio::test]
async fn failing_backend_resolves_to_none() {
    let catalog = Arc::new(RecordingCatalog::failing());
    let service = service(&catalog);

    assert!(service.resolve_slug("ana-costa").await.is_none());
    assert!(service.resolve_by_slug_or_id(ANA_ID).await.is_none());

    let outcome = service.resolve_slug_outcome("ana-costa").await;
    assert!(outcome.is_upstream_error());
}

#[tokio::test]
async fn every_resolver_is_tried_once_before_giving_up() {
    let catalog = Arc::new(RecordingCatalog::new());
    let service = service(&catalog);

    assert_eq!(
        service.resolve_by_slug_or_id_outcome(HIIT_ID).await,
        Resolution::NotFound
    );
    assert_eq!(
        catalog.calls(),
        vec![
            Call::Lookup(Collection::Profiles, "id"),
            Call::Lookup(Collection::Programs, "id"),
            Call::Lookup(Collection::Profiles, "slug"),
            Call::Sport(HIIT_ID.into()),
            Call::Lookup(Collection::Programs, "slug"),
        ]
    );
}

#[tokio::test]
async fn non_uuid_token_never_hits_id_lookups() {
    let catalog = Arc::new(
        RecordingCatalog::new().with(Collection::Programs, program("p-2", Some("hiit-30"), "active")),
    );
    let service = service(&catalog);

    let result = service.resolve_by_slug_or_id("hiit-30").await.unwrap();
    assert_eq!(result.kind, EntityKind::Program);
    assert!(
        catalog
            .calls()
            .iter()
            .all(|call| !matches!(call, Call::Lookup(_, "id")))
    );
}

#[tokio::test]
async fn program_without_slug_is_addressed_by_id() {
    let catalog = Arc::new(
        RecordingCatalog::new().with(Collection::Programs, program(HIIT_ID, None, "published")),
    );
    let service = service(&catalog);

    let result = service.resolve_by_slug_or_id(HIIT_ID).await.unwrap();
    assert_eq!(result.kind, EntityKind::Program);
    assert_eq!(result.slug, HIIT_ID);
    assert_eq!(generate_seo_url(&result), format!("/programs/{HIIT_ID}"));
}

#[tokio::test]
async fn unlisted_records_do_not_resolve() {
    let mut inactive = trainer("t-2", "ghost");
    inactive["is_active"] = false.into();
    let mut client = trainer("c-1", "bruno");
    client["role"] = "client".into();

    let catalog = Arc::new(
        RecordingCatalog::new()
            .with(Collection::Profiles, inactive)
            .with(Collection::Profiles, client)
            .with(Collection::Programs, program("p-3", Some("draft-plan"), "draft")),
    );
    let service = service(&catalog);

    assert!(service.resolve_slug("ghost").await.is_none());
    assert!(service.resolve_slug("bruno").await.is_none());
    assert!(service.resolve_slug("draft-plan").await.is_none());
}

#[tokio::test]
async fn upstream_error_on_one_resolver_does_not_hide_later_match() {
    let catalog = Arc::new(
        RecordingCatalog::new().with(Collection::Programs, program("p-4", Some("run-5k"), "active")),
    );
    catalog.fail_collection(Collection::Profiles);
    let service = service(&catalog);

    let result = match service.resolve_slug_outcome("run-5k").await {
        Resolution::Found(result) => result,
        other => panic!("expected the program to resolve, got {other:?}"),
    };
    assert_eq!(result.kind, EntityKind::Program);
    assert_eq!(result.id.as_str(), "p-4");
    assert_eq!(
        catalog.calls(),
        vec![
            Call::Lookup(Collection::Profiles, "slug"),
            Call::Sport("run-5k".into()),
            Call::Lookup(Collection::Programs, "slug"),
        ]
    );
}

#[tokio::test]
async fn upstream_error_wins_over_plain_miss() {
    let catalog = Arc::new(RecordingCatalog::new());
    catalog.fail_collection(Collection::Sports);
    let service = service(&catalog);

    assert!(service.resolve_slug_outcome("run-5k").await.is_upstream_error());
    assert!(service.resolve_slug("run-5k").await.is_none());
}

#[tokio::test]
async fn uppercase_uuid_resolves_through_identifier_lookup() {
    let catalog = Arc::new(
        RecordingCatalog::new().with(Collection::Profiles, trainer(ANA_ID, "ana-costa")),
    );
    let service = service(&catalog);

    let result = service
        .resolve_by_slug_or_id(&ANA_ID.to_uppercase())
        .await
        .expect("uuid case should not matter");
    assert_eq!(result.id.as_str(), ANA_ID);
    assert_eq!(catalog.calls(), vec![Call::Lookup(Collection::Profiles, "id")]);

    let typed = service
        .resolve_as(EntityKind::Trainer, &ANA_ID.to_uppercase())
        .await
        .expect("typed lookup normalises the id as well");
    assert_eq!(typed.slug, "ana-costa");
}

#[tokio::test]
async fn typed_lookup_stays_in_its_namespace() {
    let catalog = Arc::new(
        RecordingCatalog::new()
            .with(Collection::Profiles, trainer(ANA_ID, "ana-costa"))
            .with(Collection::Sports, sport("s-2", "ana-costa")),
    );
    let service = service(&catalog);

    let sport = service.resolve_as(EntityKind::Sport, "ana-costa").await.unwrap();
    assert_eq!(sport.kind, EntityKind::Sport);

    let by_id = service.resolve_as(EntityKind::Trainer, ANA_ID).await.unwrap();
    assert_eq!(by_id.slug, "ana-costa");

    assert!(service.resolve_as(EntityKind::Program, "ana-costa").await.is_none());
}

#[tokio::test]
async fn custom_chain_order_is_respected() {
    let catalog = Arc::new(
        RecordingCatalog::new()
            .with(Collection::Sports, sport("s-3", "pilates"))
            .with(Collection::Programs, program("p-5", Some("pilates"), "active")),
    );
    let program_first: Vec<Arc<dyn EntityResolver>> = vec![
        Arc::new(ProgramResolver::new(Arc::clone(&catalog) as _)),
        Arc::new(SportResolver::new(Arc::clone(&catalog) as _)),
    ];
    let service = SlugResolutionService::with_chains(program_first, Vec::new());

    let result = service.resolve_slug("pilates").await.unwrap();
    assert_eq!(result.kind, EntityKind::Program);
    assert_eq!(service.slug_priority(), vec![EntityKind::Program, EntityKind::Sport]);
}
