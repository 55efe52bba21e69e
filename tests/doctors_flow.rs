mod common;

use std::sync::Arc;

use common::{FakeApi, RecordingNotifier, doctor, engine};
use medSchedule::handlers::session::UiEvent;
use medSchedule::models::preferences::{Theme, load_preferences};
use medSchedule::runtime::dispatch;
use medSchedule::service::translation::Locale;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn api() -> Arc<FakeApi> {
    Arc::new(FakeApi::with_doctors(vec![
        doctor(1, "Lisa Anderson", 1, "Cardiology"),
        doctor(2, "Mark Ionescu", 2, "Dermatology"),
        doctor(3, "Sarah Johnson", 1, "Cardiology"),
    ]))
}

#[rstest]
#[case(Some(1), None, vec![1, 3])]
#[case(None, Some("DERM"), vec![2])]
#[case(None, Some("sarah"), vec![3])]
#[case(Some(2), Some("lisa"), vec![])]
#[case(None, Some("   "), vec![1, 2, 3])]
#[tokio::test]
async fn filter_keeps_matching_doctors_in_order(
    #[case] specialty_id: Option<i64>,
    #[case] search: Option<&str>,
    #[case] expected: Vec<i64>,
) {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = engine(api(), notifier);

    let state = dispatch(
        &engine,
        vec![
            UiEvent::LoadDoctors { specialty_id: None },
            UiEvent::FilterChanged {
                specialty_id,
                search: search.map(str::to_string),
            },
        ],
    )
    .await;

    let ids: Vec<i64> = state.visible_doctors().iter().map(|d| d.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(state.doctors.len(), 3);
}

#[tokio::test]
async fn doctor_detail_survives_missing_availability() {
    let api = api();
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = engine(api.clone(), notifier.clone());

    let state = dispatch(&engine, vec![UiEvent::ShowDoctor { doctor_id: 3 }]).await;

    let detail = state.doctor_detail.expect("detail");
    assert_eq!(detail.doctor.name, "Sarah Johnson");
    assert_eq!(detail.reviews.len(), 1);
    assert!(detail.availability.is_none());
    assert!(notifier.errors().await.is_empty());
    assert!(api.called("doctor_availability").await);
}

#[tokio::test]
async fn unknown_doctor_reports_backend_message() {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = engine(api(), notifier.clone());

    let state = dispatch(&engine, vec![UiEvent::ShowDoctor { doctor_id: 42 }]).await;

    assert!(state.doctor_detail.is_none());
    assert_eq!(notifier.errors().await, vec!["Doctor not found".to_string()]);
}

#[tokio::test]
async fn specialties_are_loaded() {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = engine(api(), notifier);

    let state = dispatch(&engine, vec![UiEvent::LoadSpecialties]).await;

    assert_eq!(
        state.specialties.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["Cardiology", "Dermatology"]
    );
}

#[tokio::test]
async fn theme_and_language_are_persisted() {
    let dir = std::env::temp_dir().join(format!("medschedule-{}", uuid::Uuid::new_v4()));
    let dir = dir.to_string_lossy().to_string();
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = engine(api(), notifier.clone()).persist_preferences_to(&dir);

    let state = dispatch(
        &engine,
        vec![UiEvent::SetTheme(None), UiEvent::SetLanguage(Locale::Ro)],
    )
    .await;

    assert_eq!(state.preferences.theme, Theme::Dark);
    assert_eq!(state.preferences.language, Locale::Ro);
    assert_eq!(notifier.messages().await[0], "Switched to dark mode");

    let saved = load_preferences(&dir).unwrap();
    assert_eq!(saved.theme, Theme::Dark);
    assert_eq!(saved.language, Locale::Ro);
    std::fs::remove_dir_all(&dir).unwrap();
}
