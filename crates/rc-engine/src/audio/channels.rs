use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("audio channel {channel} out of range (bank has {count})")]
    OutOfRange { channel: usize, count: usize },
}

/// Fixed bank of playback channels, generic over the backend's sound handle.
///
/// A channel plays one sound at a time. Assigning to a busy channel cuts the
/// previous sound off; the caller gets it back to stop it.
#[derive(Debug)]
pub struct ChannelBank<S> {
    channels: Vec<Option<S>>,
}

impl<S> ChannelBank<S> {
    pub fn new(count: usize) -> Self {
        Self {
            channels: (0..count).map(|_| None).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.channels.len()
    }

    /// Put `sound` on `channel`. Returns the sound that was cut off, if any.
    pub fn assign(&mut self, channel: usize, sound: S) -> Result<Option<S>, ChannelError> {
        let count = self.channels.len();
        let slot = self
            .channels
            .get_mut(channel)
            .ok_or(ChannelError::OutOfRange { channel, count })?;
        Ok(slot.replace(sound))
    }

    /// The sound last assigned to `channel`.
    pub fn current(&self, channel: usize) -> Option<&S> {
        self.channels.get(channel).and_then(Option::as_ref)
    }

    /// Empty every channel, returning the sounds that were on them.
    pub fn release_all(&mut self) -> Vec<S> {
        self.channels.iter_mut().filter_map(Option::take).collect()
    }
}
