use crate::RunId;

/// Work the host must perform on behalf of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin sending `Msg::FlowTick { run }` on the step interval. Any ticker
    /// still running for an older run must be cancelled first.
    StartFlowTicker { run: RunId },
    StopFlowTicker,
    /// Read text from the system clipboard and answer with `Msg::ClipboardRead`.
    ReadClipboard,
}
