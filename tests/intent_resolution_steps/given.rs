//! Given steps for intent resolution BDD scenarios.

use super::world::{IntentWorld, StalledModel, run_async};
use mockable::DefaultClock;
use parlance::template::{
    domain::{CommandParameterSpec, CommandParameterType, CommandSchema, CommandTemplate},
    ports::TemplateRepository,
    services::TemplateDiscoveryService,
};
use rstest_bdd_macros::given;
use std::sync::Arc;
use std::time::Duration;

const MODERATION_TEMPLATES: &[(&str, &str, &str)] = &[
    ("ban", "ban {user} for {reason}", "/ban {user} {reason}"),
    ("warn", "warn {user} for {reason}", "/warn {user} {reason}"),
    ("purge", "purge {amount}", "/purge {amount}"),
    ("mute", "mute {user} for {duration}", "/mute {user} {duration}"),
    ("say", "say {message}", "/say {message}"),
];

#[given("a guild with moderation templates")]
fn guild_with_moderation_templates(world: &mut IntentWorld) -> Result<(), eyre::Report> {
    for (name, pattern, output) in MODERATION_TEMPLATES {
        let template = CommandTemplate::builder(world.tenant.clone(), *name, *pattern, *output)
            .build(&DefaultClock)
            .map_err(|err| eyre::eyre!("invalid template {name}: {err}"))?;
        run_async(world.repository.register(&template))
            .map_err(|err| eyre::eyre!("register {name} failed: {err}"))?;
    }
    Ok(())
}

#[given("a guild without templates")]
fn guild_without_templates(world: &mut IntentWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .clear()
        .map_err(|err| eyre::eyre!("clear failed: {err}"))
}

#[given("a guild whose platform commands were discovered")]
fn guild_with_discovered_commands(world: &mut IntentWorld) -> Result<(), eyre::Report> {
    let schemas = [
        CommandSchema::new("kick", "Kick a member from the server")
            .with_parameter(CommandParameterSpec::new("user", CommandParameterType::User, true))
            .with_parameter(CommandParameterSpec::new(
                "reason",
                CommandParameterType::String,
                false,
            )),
        CommandSchema::new("ping", "Check that the bot is alive"),
    ];
    let discovery =
        TemplateDiscoveryService::new(Arc::clone(&world.repository), Arc::new(DefaultClock));
    let report = run_async(discovery.discover(&world.tenant, &schemas))
        .map_err(|err| eyre::eyre!("discovery failed: {err}"))?;
    if report.registered.len() != schemas.len() {
        return Err(eyre::eyre!(
            "expected {} discovered templates, skipped {:?}",
            schemas.len(),
            report.skipped
        ));
    }
    Ok(())
}

#[given("a generative model that never answers in time")]
fn stalled_generative_model(world: &mut IntentWorld) {
    world.config.model_timeout_ms = 50;
    world.model = Some(Arc::new(StalledModel {
        delay: Duration::from_secs(5),
    }));
}
