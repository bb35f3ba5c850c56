//! When steps for intent resolution BDD scenarios.

use super::world::{IntentWorld, run_async};
use parlance::intent::domain::{Author, ChannelId, MessageId, UserId, Utterance};
use rstest_bdd_macros::when;
use uuid::Uuid;

#[when("a member says \"{text}\"")]
fn member_says(world: &mut IntentWorld, text: String) -> Result<(), eyre::Report> {
    let utterance = Utterance::new(
        MessageId::new(Uuid::new_v4().to_string()),
        text,
        Author::new(UserId::new("7"), "Sam"),
        ChannelId::new("general"),
    );
    let service = world.service();
    let decision = run_async(service.resolve_for_tenant(&world.tenant, &utterance))
        .map_err(|err| eyre::eyre!("resolution failed: {err}"))?;
    world.last_decision = Some(decision);
    Ok(())
}
