//! Unit tests for slot extractors.

use rstest::rstest;

use super::support::{template, utterance};
use crate::intent::domain::{ParameterSource, UserId};
use crate::intent::extraction::{
    DigitIdShape, extract_amount, extract_channel, extract_duration, extract_for_template,
    extract_message, extract_reason, extract_role, extract_user, strip_mentions,
};

const SNOWFLAKE: &str = "123456789012345678";

#[rstest]
fn platform_mentions_win_over_inline_markup() {
    let shape = DigitIdShape::snowflake();
    let user = extract_user("ban <@111>", &[UserId::new("222")], true, &shape);
    assert_eq!(user.as_deref(), Some("222"));
}

#[rstest]
#[case("ban <@111> now", Some("111"))]
#[case("ban <@!333> now", Some("333"))]
#[case("ban nobody", None)]
fn inline_mentions_are_extracted(#[case] text: &str, #[case] expected: Option<&str>) {
    let user = extract_user(text, &[], false, &DigitIdShape::snowflake());
    assert_eq!(user.as_deref(), expected);
}

#[rstest]
fn bare_ids_require_opt_in() {
    let shape = DigitIdShape::snowflake();
    let text = format!("warn {SNOWFLAKE} please");
    assert_eq!(extract_user(&text, &[], true, &shape).as_deref(), Some(SNOWFLAKE));
    assert_eq!(extract_user(&text, &[], false, &shape), None);
    assert_eq!(extract_user("warn 12345 please", &[], true, &shape), None);
}

#[rstest]
fn mention_markup_is_stripped() {
    assert_eq!(
        strip_mentions("hi <@1> in <#2> with <@&3>").split_whitespace().collect::<Vec<_>>(),
        vec!["hi", "in", "with"]
    );
}

#[rstest]
#[case("ban <@1> for spamming", Some("spamming"))]
#[case("kick him because of repeated insults", Some("repeated insults"))]
#[case("mute <@1> due to flooding chat!", Some("flooding chat"))]
#[case("warn <@1> they're being rude", Some("being rude"))]
#[case("timeout <@1> for 10 minutes for spamming links", Some("spamming links"))]
#[case("reason: raid alt account", Some("raid alt account"))]
#[case("ban <@1> spamming again", Some("spamming"))]
#[case("ban <@1> for it", None)]
#[case("ban <@1>", None)]
fn reasons_follow_cue_phrases(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_reason(text).as_deref(), expected);
}

#[rstest]
#[case("purge 25 messages", Some(25))]
#[case("clear around 40", Some(40))]
#[case("delete the last 15", Some(15))]
#[case("purge twenty", Some(20))]
#[case("clean up a few messages", Some(3))]
#[case("purge <@123456789012345678> 7", Some(7))]
#[case("purge everything", None)]
#[case("purge 5000000 messages", Some(5_000_000))]
#[case("purge 99999999999999999999 messages", Some(u32::MAX))]
fn amounts_prefer_counted_nouns(#[case] text: &str, #[case] expected: Option<u32>) {
    assert_eq!(extract_amount(text), expected);
}

#[rstest]
#[case("mute <@1> for 10 minutes", Some("10m"))]
#[case("timeout them 2h", Some("2h"))]
#[case("ban for 3 days", Some("3d"))]
#[case("mute for 30 sec", Some("30s"))]
#[case("purge 5 messages", None)]
fn durations_are_normalized(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_duration(text).as_deref(), expected);
}

#[rstest]
#[case(r#"say "hello world""#, Some("hello world"))]
#[case("say 'be nice'", Some("be nice"))]
#[case("say hello everyone", Some("hello everyone"))]
#[case("announce that the event starts at 8", Some("the event starts at 8"))]
#[case("post this note: servers restart tonight", Some("servers restart tonight"))]
#[case("ban <@1>", None)]
fn messages_prefer_quotes(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_message(text).as_deref(), expected);
}

#[rstest]
#[case("give <@1> the admin role", Some("admin"))]
#[case("make her a mod", Some("moderator"))]
#[case("assign <@1> the event host role", Some("event host"))]
#[case("ban <@1>", None)]
fn roles_use_dictionary_then_grant_phrase(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_role(text).as_deref(), expected);
}

#[rstest]
#[case("lock <#123456>", Some("123456"))]
#[case("slowmode #general please", Some("general"))]
#[case("lock it", None)]
fn channels_come_from_references(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_channel(text).as_deref(), expected);
}

#[rstest]
fn template_extraction_tags_mention_sources() {
    let ban = template("ban", "ban {user} for {reason}", "/ban {user} {reason}");
    let message = utterance("ban <@123> for spamming").with_mentions([UserId::new("123")]);

    let params = extract_for_template(
        message.content(),
        message.mentions(),
        &ban,
        &DigitIdShape::snowflake(),
    );

    assert_eq!(params.get("user"), Some("123"));
    assert_eq!(params.source("user"), Some(ParameterSource::Mention));
    assert_eq!(params.get("reason"), Some("spamming"));
    assert_eq!(params.source("reason"), Some(ParameterSource::Heuristic));
}

#[rstest]
fn template_extraction_skips_undeclared_slots() {
    let warn = template("warn", "warn {user} for {reason}", "/warn {user} {reason}");
    let params = extract_for_template(
        "warn <@1> 5 times for 10 minutes",
        &[],
        &warn,
        &DigitIdShape::snowflake(),
    );

    assert!(!params.contains("amount"));
    assert!(!params.contains("duration"));
    assert_eq!(params.get("user"), Some("1"));
}
