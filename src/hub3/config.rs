use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::hub3::Hub3Encoder;
use crate::Labels;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EncodeMode {
    /// Oversized fields are cut to width and line breaks become spaces.
    #[default]
    Truncate,
    /// Oversized fields, line breaks and malformed currency, model or IBAN
    /// are rejected.
    Strict,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EncoderConfig {
    #[serde(default)]
    pub mode: EncodeMode,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl EncoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self, mode: EncodeMode) -> Self {
        self.mutate_clone(|x| x.mode = mode)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Hub3Encoder {
        Hub3Encoder::new(self.clone())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
