//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] ships the ECS `AudioCmd` queue to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue each frame.
//! - [`handle_audio_messages`] reacts to the replies (failed loads).
//! - [`update_bevy_audio_cmds`] / [`update_bevy_audio_messages`] advance the
//!   ECS message queues.
//!
//! Raylib audio calls stay on the audio thread; the game thread only talks to
//! it through channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::cursoreffect::CursorEffectConfig;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Copies of each sound loaded, so quick repeats overlap instead of
/// restarting a single playback.
pub const FX_VOICES: usize = 4;

/// Drain any pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// React to audio thread replies.
///
/// A click sound that failed to load is dropped from the
/// [`CursorEffectConfig`], so clicks stop asking for it.
pub fn handle_audio_messages(
    mut reader: MessageReader<AudioMessage>,
    mut config: Option<ResMut<CursorEffectConfig>>,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("Sound '{}' unavailable: {}", id, error);
                if let Some(config) = config.as_deref_mut()
                    && config.click_sound.as_deref() == Some(id.as_str())
                {
                    config.click_sound = None;
                }
            }
            AudioMessage::FxLoaded { id } => info!("Sound '{}' ready", id),
        }
    }
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Voice to start next: the first idle one, otherwise the one at `next`,
/// which is the least recently started when voices are used round robin.
pub fn pick_voice(playing: &[bool], next: usize) -> usize {
    match playing.iter().position(|busy| !busy) {
        Some(idle) => idle,
        None if playing.is_empty() => 0,
        None => next % playing.len(),
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every loaded [`Sound`]. Each sound is
/// loaded [`FX_VOICES`] times. Blocks until it receives
/// [`AudioCmd::Shutdown`], then unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            // No device: keep draining commands so senders never block on us.
            error!("Failed to initialize audio device, running silent: {}", e);
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    // id -> (voices, next voice when all are busy)
    let mut sounds: FxHashMap<String, (Vec<Sound>, usize)> = FxHashMap::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(first) => {
                        let mut voices = vec![first];
                        while voices.len() < FX_VOICES {
                            match audio.new_sound(&path) {
                                Ok(sound) => voices.push(sound),
                                Err(_) => break,
                            }
                        }
                        debug!(
                            "[audio] fx loaded id='{}' path='{}' voices={}",
                            id,
                            path,
                            voices.len()
                        );
                        sounds.insert(id.clone(), (voices, 0));
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        warn!(
                            "[audio] fx load failed id='{}' path='{}' error='{}'",
                            id, path, e
                        );
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some((voices, next)) = sounds.get_mut(&id) {
                        let playing: Vec<bool> = voices.iter().map(|s| s.is_playing()).collect();
                        let voice = pick_voice(&playing, *next);
                        debug!("[audio] fx play id='{}' voice={}", id, voice);
                        voices[voice].play();
                        *next = (voice + 1) % voices.len();
                    } else {
                        debug!("[audio] fx play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::MasterVolume { vol } => {
                    debug!("[audio] master volume {}", vol);
                    audio.set_master_volume(vol);
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    sounds.clear();
                    break 'run;
                }
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
    // Sounds drop before `audio`, satisfying lifetimes
}
