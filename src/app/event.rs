use crate::assets::{AssetError, Assets};
use crossterm::event::Event as CrosstermEvent;
use std::time::Duration;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Asset loading finished
    AssetsLoaded(Result<Assets, AssetError>),

    /// One frame of the animation clock
    Tick { elapsed: Duration },
}
