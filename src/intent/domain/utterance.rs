//! Incoming user utterances.

use serde::{Deserialize, Serialize};

use super::{ChannelId, MessageId, UserId};

/// The author of an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Platform user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates an author.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A free-form message addressed to the bot.
///
/// # Examples
///
/// ```
/// use parlance::intent::domain::{Author, ChannelId, MessageId, UserId, Utterance};
///
/// let utterance = Utterance::new(
///     MessageId::new("m-1"),
///     "ban <@123> for spamming",
///     Author::new(UserId::new("42"), "mod"),
///     ChannelId::new("general"),
/// )
/// .with_mentions([UserId::new("123")]);
///
/// assert_eq!(utterance.mentions().len(), 1);
/// assert!(utterance.reply_to().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    message_id: MessageId,
    content: String,
    author: Author,
    channel_id: ChannelId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    mentions: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reply_to: Option<MessageId>,
}

impl Utterance {
    /// Creates an utterance without mentions or reply linkage.
    #[must_use]
    pub fn new(
        message_id: MessageId,
        content: impl Into<String>,
        author: Author,
        channel_id: ChannelId,
    ) -> Self {
        Self {
            message_id,
            content: content.into(),
            author,
            channel_id,
            mentions: Vec::new(),
            reply_to: None,
        }
    }

    /// Sets the platform-resolved user mentions.
    #[must_use]
    pub fn with_mentions(mut self, mentions: impl IntoIterator<Item = UserId>) -> Self {
        self.mentions = mentions.into_iter().collect();
        self
    }

    /// Marks the utterance as a reply to another message.
    #[must_use]
    pub fn replying_to(mut self, message_id: MessageId) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    /// Returns the platform message identifier.
    #[must_use]
    pub const fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    /// Returns the raw message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the channel the utterance was posted in.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Returns platform-resolved user mentions, in message order.
    #[must_use]
    pub fn mentions(&self) -> &[UserId] {
        &self.mentions
    }

    /// Returns the message this utterance replies to, if any.
    #[must_use]
    pub const fn reply_to(&self) -> Option<&MessageId> {
        self.reply_to.as_ref()
    }
}
