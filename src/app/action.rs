use crate::assets::SoundId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlaySound(SoundId),
    Quit,
}
