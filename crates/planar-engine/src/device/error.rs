/// What the caller should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the frame should be retried.
    Reconfigured,
    /// Transient failure; drop this frame and try the next one.
    SkipFrame,
    /// Unrecoverable (out of memory); shut down.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether the frame that hit this error should be drawn again.
    pub fn wants_retry(self) -> bool {
        !matches!(self, SurfaceErrorAction::Fatal)
    }
}
