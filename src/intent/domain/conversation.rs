//! Conversation turns remembered for reply linking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChannelId, MessageId, UserId, Utterance};

/// One message in a channel's short-lived conversation memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Platform message identifier.
    pub message_id: MessageId,
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// Author of the message.
    pub author_id: UserId,
    /// Message text.
    pub content: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
    /// Whether the bot wrote this message.
    pub is_bot_authored: bool,
}

impl ConversationTurn {
    /// Creates a turn for a user-authored utterance.
    #[must_use]
    pub fn from_utterance(utterance: &Utterance, timestamp: DateTime<Utc>) -> Self {
        Self {
            message_id: utterance.message_id().clone(),
            channel_id: utterance.channel_id().clone(),
            author_id: utterance.author().id.clone(),
            content: utterance.content().to_owned(),
            timestamp,
            is_bot_authored: false,
        }
    }

    /// Creates a turn for a message the bot posted.
    #[must_use]
    pub fn bot_reply(
        message_id: MessageId,
        channel_id: ChannelId,
        bot_id: UserId,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            message_id,
            channel_id,
            author_id: bot_id,
            content: content.into(),
            timestamp,
            is_bot_authored: true,
        }
    }
}

/// Context handed to matchers: the linked bot reply plus recent turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationContext {
    /// Bot-authored turn the utterance replies to, if any.
    pub linked_reply: Option<ConversationTurn>,
    /// Most recent turns in the channel, oldest first.
    pub recent: Vec<ConversationTurn>,
}

impl ConversationContext {
    /// Returns `true` when there is nothing to add to a prompt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linked_reply.is_none() && self.recent.is_empty()
    }
}
