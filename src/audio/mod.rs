use std::io::{stderr, Write};

/// Events the game wants an audible cue for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    Crash,
}

/// Fire-and-forget sound output
///
/// Playback failures are swallowed; sound never feeds back into the game.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell
///
/// A terminal offers exactly one sound, so both cues map onto it.
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&mut self, _cue: SoundCue) {
        let mut out = stderr();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Discards every cue; used for `--mute` and in tests
pub struct NullSound;

impl SoundPlayer for NullSound {
    fn play(&mut self, _cue: SoundCue) {}
}
