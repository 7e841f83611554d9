//! Focused unit tests covering recommend configuration, request parsing and
//! output.

use super::helpers::{Workspace, output_entries, request_json, write_json_file, write_utf8};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, load_recommend_request,
    run_recommend_with,
};
use balcony_core::{
    CareLevel, EnvironmentReading, PlantProfile, RecommendError, RecommendationFilter,
    Recommender, ScoredRecommendation, SpaceDescriptor, SpaceError,
};
use balcony_scorer::FitnessScorer;
use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::json;

#[derive(Debug, Copy, Clone)]
enum MissingInput {
    Request,
    Catalog,
}

struct EmptyRecommender;

impl Recommender for EmptyRecommender {
    fn recommend<'c>(
        &self,
        _space: &SpaceDescriptor,
        _environment: &EnvironmentReading,
        _catalog: &'c [PlantProfile],
    ) -> Result<Vec<ScoredRecommendation<'c>>, RecommendError> {
        Ok(Vec::new())
    }
}

fn run_with_request(workspace: &Workspace, options: RecommendArgs) -> Result<Vec<u8>, CliError> {
    let request_path = workspace.path("request.json");
    write_json_file(&request_path, &request_json(4.0, 2.5));
    let mut stdout = Vec::new();
    let args = RecommendArgs {
        request_path: Some(request_path),
        ..options
    };
    run_recommend_with(args, &FitnessScorer::default(), &mut stdout)?;
    Ok(stdout)
}

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_carries_display_options() {
    let args = RecommendArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        care_level: Some(CareLevel::Easy),
        min_score: Some(70),
        limit: Some(3),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.filter.care_level, Some(CareLevel::Easy));
    assert_eq!(config.filter.min_score, Some(70));
    assert_eq!(config.filter.limit, Some(3));
    assert_eq!(config.catalog, None);
}

#[rstest]
#[case::missing_request(ARG_REQUEST, MissingInput::Request)]
#[case::missing_catalog(ARG_CATALOG, MissingInput::Catalog)]
fn validate_sources_reports_missing_inputs(
    #[case] expected_field: &'static str,
    #[case] missing: MissingInput,
) {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let catalog_path = workspace.path("catalog.json");
    if !matches!(missing, MissingInput::Request) {
        write_utf8(&request_path, b"{}");
    }
    if !matches!(missing, MissingInput::Catalog) {
        write_utf8(&catalog_path, b"[]");
    }

    let config = RecommendConfig {
        request_path,
        catalog: Some(catalog_path),
        filter: RecommendationFilter::default(),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(request_path.as_std_path()).expect("request directory");

    let config = RecommendConfig {
        request_path,
        catalog: None,
        filter: RecommendationFilter::default(),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_request_reports_missing_file() {
    let workspace = Workspace::new();
    let request_path = workspace.path("absent.json");
    let err = load_recommend_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
#[case::malformed(b"{ not json".as_slice())]
#[case::unknown_field(br#"{"space": {}, "garden": true}"#.as_slice())]
#[case::unknown_orientation(
    br#"{"space": {"length": 2, "width": 1, "railingHeight": 1, "orientation": "up",
        "peakSunHours": 4, "floorMaterial": "tile"}}"#
        .as_slice()
)]
fn load_request_reports_parse_errors(#[case] contents: &[u8]) {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, contents);
    let err = load_recommend_request(&request_path).expect_err("parse should fail");
    match err {
        CliError::ParseRequest { .. } => {}
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[rstest]
fn missing_environment_falls_back_to_default() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let mut payload = request_json(4.0, 2.5);
    payload
        .as_object_mut()
        .expect("request object")
        .remove("environment");
    write_json_file(&request_path, &payload);

    let request = load_recommend_request(&request_path).expect("request should parse");
    assert_eq!(request.environment, None);
    assert_eq!(request.environment(), EnvironmentReading::default());
}

#[rstest]
fn request_space_derives_floor_area() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_json_file(&request_path, &request_json(4.0, 2.5));

    let request = load_recommend_request(&request_path).expect("request should parse");
    let space = request.space.to_descriptor().expect("valid space");
    assert!((space.floor_area - 10.0).abs() < 1e-9);
}

#[rstest]
fn zero_width_is_an_invalid_space() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_json_file(&request_path, &request_json(4.0, 0.0));

    let args = RecommendArgs {
        request_path: Some(request_path),
        ..RecommendArgs::default()
    };
    let err = run_recommend_with(args, &FitnessScorer::default(), &mut Vec::new())
        .expect_err("zero width should fail");
    match err {
        CliError::InvalidSpace { source, .. } => {
            assert_eq!(source, SpaceError::NonPositiveDimension { field: "width" });
        }
        other => panic!("expected InvalidSpace, found {other:?}"),
    }
}

#[rstest]
fn recommend_prints_full_ranking() {
    let workspace = Workspace::new();
    let stdout = run_with_request(&workspace, RecommendArgs::default()).expect("recommend");
    let entries = output_entries(&stdout);

    assert_eq!(entries.len(), 7);
    let basil = entries
        .iter()
        .find(|entry| entry["plant"]["id"] == "basil")
        .expect("basil listed");
    assert_eq!(basil["overallScore"], 86);
    assert_eq!(basil["displayScore"], 86);
    assert_eq!(basil["warnings"], json!([]));
    assert!(entries.iter().all(|entry| {
        let overall = entry["overallScore"].as_u64().unwrap_or_default();
        entry["displayScore"].as_u64() == Some(overall.min(100))
    }));
    assert!(
        entries
            .windows(2)
            .all(|pair| pair[0]["overallScore"].as_u64() >= pair[1]["overallScore"].as_u64())
    );
}

#[rstest]
fn recommend_applies_filters() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        care_level: Some(CareLevel::Easy),
        limit: Some(2),
        ..RecommendArgs::default()
    };
    let entries = output_entries(&run_with_request(&workspace, args).expect("recommend"));

    assert!(entries.len() <= 2);
    assert!(!entries.is_empty());
    for entry in entries {
        assert_eq!(entry["plant"]["care"]["careLevel"], "easy");
    }
}

#[rstest]
fn recommend_uses_custom_catalog() {
    let workspace = Workspace::new();
    let catalog_path = workspace.path("catalog.json");
    let plants = [balcony_core::test_support::sample_profile("mint")];
    let payload = serde_json::to_vec(&plants).expect("serialise catalog");
    write_utf8(&catalog_path, &payload);

    let args = RecommendArgs {
        catalog: Some(catalog_path),
        ..RecommendArgs::default()
    };
    let entries = output_entries(&run_with_request(&workspace, args).expect("recommend"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["plant"]["id"], "mint");
}

#[rstest]
fn recommend_delegates_to_the_recommender() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_json_file(&request_path, &request_json(4.0, 2.5));
    let args = RecommendArgs {
        request_path: Some(request_path),
        ..RecommendArgs::default()
    };
    let mut stdout = Vec::new();
    run_recommend_with(args, &EmptyRecommender, &mut stdout).expect("recommend");
    assert_eq!(String::from_utf8(stdout).expect("utf-8"), "[]\n");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let workspace = Workspace::new();
    let env_request = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": workspace.path("from-file.json").as_str(),
            "limit": 3,
            "care_level": "moderate",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
    }));
    composer.push_cli(json!({
        "care_level": "easy",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.filter.limit, Some(3));
    assert_eq!(config.filter.care_level, Some(CareLevel::Easy));
}
