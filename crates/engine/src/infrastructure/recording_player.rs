//! Player entity that records commands instead of driving a live ped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use wardrobe_domain::{ModelHash, PlayerCommand, PlayerId};

use crate::infrastructure::ports::PlayerEntity;

#[derive(Debug)]
struct RecordedState {
    model: ModelHash,
    commands: Vec<PlayerCommand>,
}

/// Records every visual command in issue order and tracks the current model.
///
/// Used by the preview tool and by tests that assert on command sequences.
#[derive(Debug)]
pub struct RecordingPlayer {
    id: PlayerId,
    connected: AtomicBool,
    state: Mutex<RecordedState>,
}

impl RecordingPlayer {
    pub fn new(id: PlayerId) -> Self {
        Self::with_model(id, ModelHash::new(0))
    }

    /// Start from an already assigned model.
    pub fn with_model(id: PlayerId, model: ModelHash) -> Self {
        Self {
            id,
            connected: AtomicBool::new(true),
            state: Mutex::new(RecordedState {
                model,
                commands: Vec::new(),
            }),
        }
    }

    /// Simulate the player leaving; the entity becomes invalid.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Commands issued so far, oldest first.
    pub fn commands(&self) -> Vec<PlayerCommand> {
        self.lock().commands.clone()
    }

    /// Drain the recorded commands, keeping the current model.
    pub fn take_commands(&self) -> Vec<PlayerCommand> {
        std::mem::take(&mut self.lock().commands)
    }

    fn lock(&self) -> MutexGuard<'_, RecordedState> {
        // A panic while recording leaves the Vec intact
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: PlayerCommand) {
        self.lock().commands.push(command);
    }
}

impl PlayerEntity for RecordingPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn is_valid(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn model(&self) -> ModelHash {
        self.lock().model
    }

    fn set_model(&self, model: ModelHash) {
        let mut state = self.lock();
        state.model = model;
        state.commands.push(PlayerCommand::SetModel { model });
    }

    fn clear_prop(&self, slot: u8) {
        self.record(PlayerCommand::ClearProp { slot });
    }

    fn set_dlc_prop(&self, dlc: u32, slot: u8, drawable: u16, texture: u8) {
        self.record(PlayerCommand::SetDlcProp {
            dlc,
            slot,
            drawable,
            texture,
        });
    }

    fn set_dlc_clothes(&self, dlc: u32, slot: u8, drawable: u16, texture: u8, palette: u8) {
        self.record(PlayerCommand::SetDlcClothes {
            dlc,
            slot,
            drawable,
            texture,
            palette,
        });
    }
}
