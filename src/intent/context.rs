//! Short-lived per-channel conversation memory.
//!
//! Turns are kept in a bounded ring per channel and expire after a fixed
//! lifetime. Expired turns are never returned, whether or not a sweep has
//! run since they expired.

use chrono::TimeDelta;
use mockable::Clock;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::config::ResolutionConfig;
use super::domain::{ChannelId, ConversationContext, ConversationTurn, MessageId, Utterance};

type Channels = HashMap<ChannelId, VecDeque<ConversationTurn>>;

/// Bounded, expiring memory of recent turns keyed by channel.
///
/// # Examples
///
/// ```
/// use mockable::{Clock, DefaultClock};
/// use parlance::intent::context::ConversationContextStore;
/// use parlance::intent::domain::{ChannelId, ConversationTurn, MessageId, UserId};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let clock = Arc::new(DefaultClock);
/// let store = ConversationContextStore::new(Arc::clone(&clock), 2, Duration::from_secs(60));
/// let channel = ChannelId::new("general");
/// for id in ["1", "2", "3"] {
///     store.record(ConversationTurn::bot_reply(
///         MessageId::new(id),
///         channel.clone(),
///         UserId::new("bot"),
///         format!("reply {id}"),
///         clock.utc(),
///     ));
/// }
///
/// assert!(store.find(&channel, &MessageId::new("1")).is_none());
/// assert_eq!(store.recent(&channel, 10).len(), 2);
/// ```
#[derive(Debug)]
pub struct ConversationContextStore<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    capacity: usize,
    ttl: TimeDelta,
    channels: Mutex<Channels>,
}

impl<C> ConversationContextStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store keeping at most `capacity` turns per channel for
    /// `ttl`.
    #[must_use]
    pub fn new(clock: Arc<C>, capacity: usize, ttl: Duration) -> Self {
        Self {
            clock,
            capacity: capacity.max(1),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a store using the configured capacity and lifetime.
    #[must_use]
    pub fn from_config(clock: Arc<C>, config: &ResolutionConfig) -> Self {
        Self::new(clock, config.context_capacity, config.context_ttl())
    }

    /// Records a turn, evicting the oldest turn of a full channel.
    ///
    /// Re-recording a message identifier replaces the earlier turn.
    pub fn record(&self, turn: ConversationTurn) {
        let mut channels = self.lock();
        let ring = channels.entry(turn.channel_id.clone()).or_default();
        ring.retain(|existing| existing.message_id != turn.message_id);
        while ring.len() >= self.capacity {
            ring.pop_front();
        }
        ring.push_back(turn);
    }

    /// Returns the live turn with the given message identifier.
    #[must_use]
    pub fn find(&self, channel: &ChannelId, message_id: &MessageId) -> Option<ConversationTurn> {
        let channels = self.lock();
        channels
            .get(channel)?
            .iter()
            .find(|turn| &turn.message_id == message_id && self.is_live(turn))
            .cloned()
    }

    /// Returns the bot-authored turn the utterance replies to, if it is
    /// still remembered.
    #[must_use]
    pub fn linked_bot_turn(&self, utterance: &Utterance) -> Option<ConversationTurn> {
        let target = utterance.reply_to()?;
        self.find(utterance.channel_id(), target)
            .filter(|turn| turn.is_bot_authored)
    }

    /// Returns up to `limit` live turns for the channel, oldest first.
    #[must_use]
    pub fn recent(&self, channel: &ChannelId, limit: usize) -> Vec<ConversationTurn> {
        let channels = self.lock();
        let Some(ring) = channels.get(channel) else {
            return Vec::new();
        };
        let live: Vec<&ConversationTurn> = ring.iter().filter(|turn| self.is_live(turn)).collect();
        let skip = live.len().saturating_sub(limit);
        live.into_iter().skip(skip).cloned().collect()
    }

    /// Builds the matcher context for an utterance.
    ///
    /// The utterance's own turn is excluded from the recent list.
    #[must_use]
    pub fn context_for(&self, utterance: &Utterance, limit: usize) -> ConversationContext {
        let recent = self
            .recent(utterance.channel_id(), limit.saturating_add(1))
            .into_iter()
            .filter(|turn| &turn.message_id != utterance.message_id())
            .collect::<Vec<_>>();
        let skip = recent.len().saturating_sub(limit);
        ConversationContext {
            linked_reply: self.linked_bot_turn(utterance),
            recent: recent.into_iter().skip(skip).collect(),
        }
    }

    /// Drops every expired turn and empty channel, returning how many turns
    /// were removed.
    ///
    /// Hosts call this periodically; reads already ignore expired turns.
    pub fn sweep_expired(&self) -> usize {
        let mut channels = self.lock();
        let mut removed = 0;
        for ring in channels.values_mut() {
            let before = ring.len();
            ring.retain(|turn| self.is_live(turn));
            removed += before - ring.len();
        }
        channels.retain(|_, ring| !ring.is_empty());
        removed
    }

    /// Returns the number of stored turns, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().values().map(VecDeque::len).sum()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all stored turns.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn is_live(&self, turn: &ConversationTurn) -> bool {
        self.clock.utc().signed_duration_since(turn.timestamp) <= self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, Channels> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
