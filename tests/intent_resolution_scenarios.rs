//! Behaviour tests for resolving chat messages into commands.

mod intent_resolution_steps;

use intent_resolution_steps::world::{IntentWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Explicit command with a platform mention executes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_command_executes(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Greeting receives a conversational reply"
)]
#[tokio::test(flavor = "multi_thread")]
async fn greeting_is_conversational(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Polite paraphrase resolves to purge"
)]
#[tokio::test(flavor = "multi_thread")]
async fn polite_paraphrase_resolves(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Small talk followed by a command still executes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn small_talk_then_command_executes(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Slow generative model falls back to the heuristic"
)]
#[tokio::test(flavor = "multi_thread")]
async fn slow_model_falls_back(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Guild without templates is told nothing is configured"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unconfigured_guild_converses(world: IntentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/intent_resolution.feature",
    name = "Discovered platform commands resolve"
)]
#[tokio::test(flavor = "multi_thread")]
async fn discovered_commands_resolve(world: IntentWorld) {
    let _ = world;
}
