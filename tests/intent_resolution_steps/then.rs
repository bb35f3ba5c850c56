//! Then steps for intent resolution BDD scenarios.

use super::world::IntentWorld;
use eyre::{Result, eyre};
use parlance::intent::domain::ResolutionDecision;
use rstest_bdd_macros::then;

fn decision(world: &IntentWorld) -> Result<&ResolutionDecision> {
    world
        .last_decision
        .as_ref()
        .ok_or_else(|| eyre!("missing decision in scenario world"))
}

#[then("the decision executes \"{output}\"")]
fn decision_executes(world: &IntentWorld, output: String) -> Result<()> {
    let ResolutionDecision::Execute {
        rendered_output, ..
    } = decision(world)?
    else {
        return Err(eyre!("expected execute, got {:?}", world.last_decision));
    };
    if *rendered_output != output {
        return Err(eyre!("expected {output:?}, rendered {rendered_output:?}"));
    }
    Ok(())
}

#[then("the parameter \"{name}\" is \"{value}\"")]
fn parameter_is(world: &IntentWorld, name: String, value: String) -> Result<()> {
    let (_, params) = decision(world)?
        .action()
        .ok_or_else(|| eyre!("expected an executable decision"))?;
    let actual = params
        .get(&name)
        .ok_or_else(|| eyre!("parameter {name} missing from {params:?}"))?;
    if *actual != value {
        return Err(eyre!("expected {name}={value:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the decision is a \"{intent}\" conversation")]
fn decision_is_conversation(world: &IntentWorld, intent: String) -> Result<()> {
    let ResolutionDecision::Converse {
        intent: actual,
        reply,
    } = decision(world)?
    else {
        return Err(eyre!("expected converse, got {:?}", world.last_decision));
    };
    if actual.as_str() != intent {
        return Err(eyre!("expected {intent} intent, got {actual}"));
    }
    if reply.trim().is_empty() {
        return Err(eyre!("conversational reply is empty"));
    }
    Ok(())
}
