/// Handle to a sound registered in the bank at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundId(usize);

/// Names of the configured sound effects, fixed after setup.
#[derive(Clone, Default)]
pub struct SoundBank {
    names: Vec<String>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) -> SoundId {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            return SoundId(index);
        }
        self.names.push(name.to_string());
        SoundId(self.names.len() - 1)
    }

    pub fn name(&self, sound: SoundId) -> &str {
        &self.names[sound.0]
    }
}

/// Fire-and-forget playback. Gameplay never reads anything back from the
/// mixer, so a dropped play call costs nothing but the effect.
pub trait Mixer {
    fn play(&mut self, sound: SoundId);
}

/// Mixer used when no audio device is wired up; requests are traced and
/// dropped.
pub struct NullMixer {
    bank: SoundBank,
}

impl NullMixer {
    pub fn new(bank: SoundBank) -> Self {
        Self { bank }
    }
}

impl Mixer for NullMixer {
    fn play(&mut self, sound: SoundId) {
        log::debug!("Play sound '{}'", self.bank.name(sound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_deduplicates_by_name() {
        let mut bank = SoundBank::new();
        let sword = bank.register("sword");
        let magic = bank.register("magic");
        let sword_again = bank.register("sword");

        assert_eq!(sword, sword_again);
        assert_ne!(sword, magic);
        assert_eq!(bank.name(magic), "magic");
    }
}
