use std::collections::BTreeSet;

/// Event sources the widget listens to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Listener {
    /// Pointer movement anywhere in the window; drives tilt and orbit.
    PointerMove,
    /// Pointer entering the viewport.
    PointerEnter,
    /// Pointer leaving the viewport.
    PointerLeave,
    /// Viewport size changes.
    Resize,
}

impl Listener {
    pub const ALL: [Listener; 4] = [
        Listener::PointerMove,
        Listener::PointerEnter,
        Listener::PointerLeave,
        Listener::Resize,
    ];

    /// Window-scoped listeners must be removed explicitly on unmount; the
    /// others belong to the viewport surface and go away with it.
    pub fn is_window_scoped(self) -> bool {
        matches!(self, Listener::PointerMove | Listener::Resize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Unmounted,
    Mounted,
    Disposed,
}

/// What the caller must do after `unmount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teardown {
    /// Release the native render resources now.
    Dispose,
    /// Resources were already released by an earlier unmount.
    AlreadyDisposed,
    /// Nothing was ever mounted.
    NotMounted,
}

/// Mount/unmount bookkeeping of the widget.
///
/// Tracks which listeners are attached, whether the frame loop runs, and
/// guarantees the dispose signal is handed out once.
#[derive(Debug, Clone)]
pub struct Mount {
    state: MountState,
    listeners: BTreeSet<Listener>,
    frames: u64,
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl Mount {
    pub fn new() -> Self {
        Self {
            state: MountState::Unmounted,
            listeners: BTreeSet::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    /// Attach all listeners and start the frame loop.
    ///
    /// Mounting twice is a no-op; a disposed widget cannot be remounted.
    pub fn mount(&mut self) -> bool {
        if self.state != MountState::Unmounted {
            return false;
        }
        self.listeners.extend(Listener::ALL);
        self.state = MountState::Mounted;
        tracing::debug!(listeners = self.listeners.len(), "widget mounted");
        true
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn attached(&self) -> impl Iterator<Item = Listener> + '_ {
        self.listeners.iter().copied()
    }

    /// Whether the frame loop should schedule another frame.
    pub fn is_running(&self) -> bool {
        self.state == MountState::Mounted
    }

    /// Count a rendered frame. Frames after unmount are not counted.
    pub fn record_frame(&mut self) -> bool {
        if self.is_running() {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Detach window-scoped listeners, stop the frame loop and hand out the
    /// dispose signal the first time.
    pub fn unmount(&mut self) -> Teardown {
        match self.state {
            MountState::Unmounted => Teardown::NotMounted,
            MountState::Disposed => Teardown::AlreadyDisposed,
            MountState::Mounted => {
                self.listeners.retain(|l| !l.is_window_scoped());
                self.state = MountState::Disposed;
                tracing::info!(frames = self.frames, "widget unmounted");
                Teardown::Dispose
            }
        }
    }
}
