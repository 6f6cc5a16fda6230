use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    /// Global volume applied to every sound, `0.0` mutes.
    MasterVolume { vol: f32 },
    Shutdown,
}

/// Replies sent *back* from the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
