// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for player events.
//!
//! Each player session gets its own subscription, identified by its
//! [`SessionId`], so replacing the video source tears the old stream down and
//! starts a new one. Events carry their session so late deliveries can be
//! discarded.

use crate::application::port::PlayerEvent;
use crate::domain::video::SessionId;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use std::hash::{Hash, Hasher};
use tokio::sync::broadcast::{self, error::RecvError};

/// Capacity of the channel between the forwarding task and Iced.
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Event receiver of one session, identified by the session alone.
struct EventSource {
    session: SessionId,
    events: broadcast::Receiver<PlayerEvent>,
}

impl Hash for EventSource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.session.hash(state);
    }
}

/// Forwards the events of one player session to the UI.
pub fn player_events(
    session: SessionId,
    events: broadcast::Receiver<PlayerEvent>,
) -> iced::Subscription<(SessionId, PlayerEvent)> {
    iced::Subscription::run_with(EventSource { session, events }, forward)
}

fn forward(source: &EventSource) -> impl Stream<Item = (SessionId, PlayerEvent)> {
    let session = source.session;
    let mut events = source.events.resubscribe();

    stream::channel(EVENT_CHANNEL_CAPACITY, async move |mut output| loop {
        match events.recv().await {
            Ok(event) => {
                if output.send((session, event)).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(
                    "Player session {} skipped {} events",
                    session.value(),
                    skipped
                );
            }
            Err(RecvError::Closed) => break,
        }
    })
}
