//! Chat channel selection

use crate::models::{Channel, Message};

/// One selected channel among a fixed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSelector {
    channels: Vec<Channel>,
    active: usize,
}

impl ChannelSelector {
    /// Starts on the first channel. `None` for an empty list.
    pub fn new(channels: Vec<Channel>) -> Option<Self> {
        if channels.is_empty() {
            return None;
        }
        Some(Self { channels, active: 0 })
    }

    /// Switch channel. Returns `true` if the visible messages changed.
    pub fn select(&mut self, channel_id: &str) -> bool {
        match self.channels.iter().position(|c| c.id == channel_id) {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!(channel_id = %channel_id, "Ignoring unknown channel");
                false
            }
        }
    }

    pub fn active(&self) -> &Channel {
        &self.channels[self.active]
    }

    pub fn messages(&self) -> &[Message] {
        &self.active().messages
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_select_replaces_messages() {
        let channels = catalog::sample_channels();
        let second = channels[1].clone();
        let mut selector = ChannelSelector::new(channels).unwrap();

        assert!(selector.select(&second.id));
        assert_eq!(selector.messages(), second.messages.as_slice());
    }

    #[test]
    fn test_reselect_active_is_noop() {
        let mut selector = ChannelSelector::new(catalog::sample_channels()).unwrap();
        let before = selector.clone();
        let active = selector.active().id.clone();

        assert!(!selector.select(&active));
        assert_eq!(selector, before);
    }

    #[test]
    fn test_unknown_channel_ignored() {
        let mut selector = ChannelSelector::new(catalog::sample_channels()).unwrap();
        let before = selector.clone();
        assert!(!selector.select("no-such-channel"));
        assert_eq!(selector, before);
        assert!(ChannelSelector::new(Vec::new()).is_none());
    }
}
