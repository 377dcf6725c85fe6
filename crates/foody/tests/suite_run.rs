//! End-to-end runs of the suite against the local stub.

mod common;

use common::SuiteHarness;
use foody::{OutcomeStatus, Scenario, SuiteConfig, SuiteError, SuiteRunner};

#[tokio::test]
async fn test_full_suite_passes() {
    let harness = SuiteHarness::start().await;

    let report = SuiteRunner::new(harness.config.clone())
        .run()
        .await
        .expect("suite should start");

    let ran: Vec<Scenario> = report.outcomes().iter().map(|o| o.scenario).collect();
    assert_eq!(ran, Scenario::ALL.to_vec());
    assert!(report.success(), "{}", report.render());
    assert_eq!(report.passed(), 7);

    // The created food was deleted again by the delete scenario.
    assert!(harness.server.storage().is_empty());
}

#[tokio::test]
async fn test_selected_dependent_runs_create_first() {
    let harness = SuiteHarness::start().await;

    let report = SuiteRunner::new(harness.config.clone())
        .with_selection([Scenario::EditFoodTitle])
        .run()
        .await
        .unwrap();

    assert_eq!(report.outcomes().len(), 2);
    let create = report.outcome(Scenario::CreateFood).unwrap();
    assert!(create.prerequisite);
    assert!(create.passed());
    assert!(report.outcome(Scenario::EditFoodTitle).unwrap().passed());

    // Nothing deleted it.
    assert_eq!(harness.server.storage().len(), 1);
}

#[tokio::test]
async fn test_negative_scenarios_only() {
    let harness = SuiteHarness::start().await;

    let report = SuiteRunner::new(harness.config.clone())
        .with_selection([
            Scenario::DeleteNonExistingFood,
            Scenario::EditNonExistingFood,
            Scenario::CreateFoodWithoutRequiredFields,
        ])
        .run()
        .await
        .unwrap();

    let ran: Vec<Scenario> = report.outcomes().iter().map(|o| o.scenario).collect();
    assert_eq!(
        ran,
        vec![
            Scenario::CreateFoodWithoutRequiredFields,
            Scenario::EditNonExistingFood,
            Scenario::DeleteNonExistingFood,
        ]
    );
    assert!(report.success(), "{}", report.render());
    assert!(harness.server.storage().is_empty());
}

#[tokio::test]
async fn test_dependents_skipped_when_create_fails() {
    let harness = SuiteHarness::start().await;
    let session = harness.session_with_token("not-a-token");

    let report = SuiteRunner::new(harness.config.clone())
        .run_with_session(&session)
        .await;

    assert_eq!(report.outcomes().len(), 7);
    assert!(!report.success());

    let create = report.outcome(Scenario::CreateFood).unwrap();
    match &create.status {
        OutcomeStatus::Failed(message) => {
            assert!(message.contains("Response status should be Created"));
            assert!(message.contains("401"));
        }
        other => panic!("expected failure, got {:?}", other),
    }

    for dependent in [Scenario::EditFoodTitle, Scenario::DeleteFood] {
        assert!(matches!(
            report.outcome(dependent).unwrap().status,
            OutcomeStatus::Skipped(_)
        ));
    }

    // Independent scenarios still ran.
    assert!(matches!(
        report.outcome(Scenario::GetAllFoods).unwrap().status,
        OutcomeStatus::Failed(_)
    ));
    assert_eq!(report.skipped(), 2);
}

#[tokio::test]
async fn test_wrong_password_is_setup_failure() {
    let harness = SuiteHarness::start().await;
    let config = SuiteConfig {
        password: "wrong".to_string(),
        ..harness.config.clone()
    };

    let err = SuiteRunner::new(config).run().await.unwrap_err();
    assert!(matches!(err, SuiteError::Setup { .. }));
    assert!(err.is_fatal());
    assert!(err.to_string().contains("401"));
    assert!(harness.server.storage().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_setup_failure() {
    let config = SuiteConfig::for_testing("http://127.0.0.1:1");

    let err = SuiteRunner::new(config).run().await.unwrap_err();
    assert!(matches!(err, SuiteError::Setup { .. }));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_login() {
    let config = SuiteConfig {
        base_url: "ftp://example.com".to_string(),
        request_timeout: 0,
        ..SuiteConfig::default()
    };

    let err = SuiteRunner::new(config).run().await.unwrap_err();
    match err {
        SuiteError::Config(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected config error, got {:?}", other),
    }
}
