//! Generation settings forwarded to chat-completion providers

use thiserror::Error;

/// Optional parameters controlling completion generation
///
/// All fields are optional; unset fields are omitted from the provider
/// request so the provider default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSettings {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for randomness (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Top-p nucleus sampling (0.0 to 1.0)
    pub top_p: Option<f32>,
    /// Stop sequences
    pub stop: Option<Vec<String>>,
    /// Presence penalty (-2.0 to 2.0)
    pub presence_penalty: Option<f32>,
    /// Frequency penalty (-2.0 to 2.0)
    pub frequency_penalty: Option<f32>,
    /// Random seed for deterministic generation
    pub seed: Option<u64>,
}

impl ChatSettings {
    /// Create a new settings builder
    pub fn builder() -> ChatSettingsBuilder {
        ChatSettingsBuilder::default()
    }
}

/// Error raised by [`ChatSettingsBuilder::try_build`]
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    /// Temperature outside the accepted range
    #[error("temperature must be within 0.0..=2.0, got {0}")]
    TemperatureOutOfRange(f32),
    /// Top-p outside the accepted range
    #[error("top_p must be within 0.0..=1.0, got {0}")]
    TopPOutOfRange(f32),
}

/// Builder for [`ChatSettings`]
#[derive(Default)]
pub struct ChatSettingsBuilder {
    settings: ChatSettings,
}

impl ChatSettingsBuilder {
    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.settings.max_tokens = Some(tokens);
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.settings.temperature = Some(temp);
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.settings.top_p = Some(p);
        self
    }

    /// Set stop sequences
    pub fn stop(mut self, sequences: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.settings.stop = Some(sequences.into_iter().map(Into::into).collect());
        self
    }

    /// Set presence penalty
    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.settings.presence_penalty = Some(penalty);
        self
    }

    /// Set frequency penalty
    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.settings.frequency_penalty = Some(penalty);
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    /// Build the settings
    pub fn build(self) -> ChatSettings {
        self.settings
    }

    /// Build the settings, validating ranges
    pub fn try_build(self) -> Result<ChatSettings, BuildError> {
        if let Some(temp) = self.settings.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(BuildError::TemperatureOutOfRange(temp));
            }
        }
        if let Some(p) = self.settings.top_p {
            if !(0.0..=1.0).contains(&p) {
                return Err(BuildError::TopPOutOfRange(p));
            }
        }
        Ok(self.settings)
    }
}
