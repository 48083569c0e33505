//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ReviewCommentsConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes a [`ReviewCommentsConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> ReviewCommentsConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    ReviewCommentsConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Environment variables that could leak into loading tests from the host.
pub const CONFIG_ENV_VARS: [&str; 9] = [
    "REVIEW_COMMENTS_TOKEN",
    "REVIEW_COMMENTS_OWNER",
    "REVIEW_COMMENTS_REPO",
    "REVIEW_COMMENTS_API_BASE",
    "REVIEW_COMMENTS_ACTION",
    "REVIEW_COMMENTS_COMMENT_ID",
    "GITHUB_TOKEN",
    "GITHUB_OWNER",
    "GITHUB_REPO",
];
