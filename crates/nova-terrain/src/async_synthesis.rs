//! Background texture synthesis.
//!
//! Runs [`TextureSynthesizer::synthesize`] on a dedicated worker thread and
//! hands the finished set back through a bounded channel. The texture set is
//! only ever observed whole: callers either get the completed `Arc<TextureSet>`
//! or nothing.

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError, bounded};
use tracing::info;

use crate::synth::{TextureSet, TextureSynthesizer};

/// Errors surfaced while waiting for background synthesis.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The worker thread could not be spawned.
    #[error("failed to spawn synthesis worker")]
    Spawn(#[source] std::io::Error),

    /// The worker exited without delivering a texture set.
    #[error("synthesis worker exited before delivering textures")]
    WorkerLost,

    /// The texture set was already taken from this handle.
    #[error("texture set already taken")]
    AlreadyTaken,
}

/// A completed set plus how long it took.
#[derive(Clone, Debug)]
pub struct SynthesizedTextures {
    /// The immutable texture set.
    pub textures: Arc<TextureSet>,
    /// Wall-clock synthesis time in microseconds.
    pub generation_time_us: u64,
}

/// Handle to an in-flight synthesis job.
pub struct AsyncTextureSynthesis {
    result_receiver: Receiver<SynthesizedTextures>,
    taken: bool,
}

impl AsyncTextureSynthesis {
    /// Start synthesizing on a background thread.
    pub fn spawn(synthesizer: TextureSynthesizer) -> Result<Self, SynthesisError> {
        let (result_sender, result_receiver) = bounded::<SynthesizedTextures>(1);
        let seed = synthesizer.seed();

        std::thread::Builder::new()
            .name("texture-synthesis".into())
            .spawn(move || {
                let start = Instant::now();
                let textures = Arc::new(synthesizer.synthesize());
                let elapsed = start.elapsed().as_micros() as u64;
                let _ = result_sender.send(SynthesizedTextures {
                    textures,
                    generation_time_us: elapsed,
                });
            })
            .map_err(SynthesisError::Spawn)?;

        info!(seed, "Texture synthesis started in background");
        Ok(Self::from_receiver(result_receiver))
    }

    /// Wrap the receiving end of a worker's result channel.
    pub(crate) fn from_receiver(result_receiver: Receiver<SynthesizedTextures>) -> Self {
        Self {
            result_receiver,
            taken: false,
        }
    }

    /// Poll for the finished set without blocking.
    ///
    /// Returns `Ok(None)` while synthesis is still running.
    pub fn try_take(&mut self) -> Result<Option<SynthesizedTextures>, SynthesisError> {
        if self.taken {
            return Err(SynthesisError::AlreadyTaken);
        }
        match self.result_receiver.try_recv() {
            Ok(done) => {
                self.taken = true;
                Ok(Some(done))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SynthesisError::WorkerLost),
        }
    }

    /// Block until the set is ready.
    pub fn wait(self) -> Result<SynthesizedTextures, SynthesisError> {
        if self.taken {
            return Err(SynthesisError::AlreadyTaken);
        }
        self.result_receiver
            .recv()
            .map_err(|_| SynthesisError::WorkerLost)
    }

    /// `true` once the set has been taken from this handle.
    pub fn is_taken(&self) -> bool {
        self.taken
    }
}
