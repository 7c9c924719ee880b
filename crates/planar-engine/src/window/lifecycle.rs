//! What a scheduled frame does, given the state of the rendering context.

/// Rendering context as seen at the start of a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ContextState {
    /// Never built, released after a loss, or dropped on suspend.
    Missing,
    /// The device reported itself lost.
    Lost,
    Live,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum FrameAction {
    /// Suspended: no frame, nothing scheduled until `resumed`.
    Idle,
    /// No surface can be made yet (zero-area window); retry next frame.
    Defer,
    /// Drop the lost context, then defer.
    Release,
    /// Build a fresh context, then draw.
    Rebuild,
    Draw,
}

/// No draw is ever issued against a lost context, and a surface is only
/// created for a window with a non-zero area.
pub(crate) fn plan_frame(
    suspended: bool,
    context: ContextState,
    viewport_valid: bool,
) -> FrameAction {
    if suspended {
        return FrameAction::Idle;
    }
    match (context, viewport_valid) {
        (ContextState::Live, _) => FrameAction::Draw,
        (ContextState::Lost, true) | (ContextState::Missing, true) => FrameAction::Rebuild,
        (ContextState::Lost, false) => FrameAction::Release,
        (ContextState::Missing, false) => FrameAction::Defer,
    }
}
