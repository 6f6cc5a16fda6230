//! Bridge between the ECS world and the background audio thread.
//!
//! [`setup_audio`] spawns the thread and inserts the [`AudioBridge`] plus the
//! `Messages<AudioCmd>` / `Messages<AudioMessage>` queues. [`shutdown_audio`]
//! stops and joins it. Systems talk to the thread by writing [`AudioCmd`]
//! messages; [`crate::systems::audio::forward_audio_cmds`] ships them over.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register bridge resources.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    init_audio_messages(world);
}

/// Register the audio message queues without starting a thread.
///
/// Tests use this so that systems writing [`AudioCmd`] run in a headless
/// world.
pub fn init_audio_messages(world: &mut World) {
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Queue a command from outside a system, e.g. during setup.
pub fn send_audio_cmd(world: &mut World, cmd: AudioCmd) {
    world.resource_mut::<Messages<AudioCmd>>().write(cmd);
}

/// Gracefully request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
