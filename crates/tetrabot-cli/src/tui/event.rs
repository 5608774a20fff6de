use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Game logic update timing.
    Tick,
    /// Screen redraw after a state change.
    Render,
    Crossterm(CrosstermEvent),
}
