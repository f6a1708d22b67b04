//! Pre-paint deferral.

/// Mutations waiting for the next render pass.
#[derive(Debug, Clone)]
pub struct FrameQueue<M> {
    pending: Vec<M>,
}

impl<M> Default for FrameQueue<M> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<M> FrameQueue<M> {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every queued mutation, in the order they were requested.
    pub fn drain(&mut self) -> Vec<M> {
        std::mem::take(&mut self.pending)
    }
}

/// Where style mutations go when a handler wants them applied.
///
/// With a pre-paint hook the mutation waits in a [`FrameQueue`] until the
/// host drains it right before rendering. Without one it is handed straight
/// back to be applied now.
#[derive(Debug, Clone)]
pub enum FrameHook<M> {
    PrePaint(FrameQueue<M>),
    Immediate,
}

impl<M> FrameHook<M> {
    pub fn pre_paint() -> Self {
        FrameHook::PrePaint(FrameQueue::default())
    }

    /// Request a mutation. Returns it back when it must be applied now.
    #[must_use]
    pub fn request(&mut self, mutation: M) -> Option<M> {
        match self {
            FrameHook::PrePaint(queue) => {
                queue.pending.push(mutation);
                None
            }
            FrameHook::Immediate => Some(mutation),
        }
    }

    /// Mutations due before the upcoming render pass.
    pub fn before_render(&mut self) -> Vec<M> {
        match self {
            FrameHook::PrePaint(queue) => queue.drain(),
            FrameHook::Immediate => Vec::new(),
        }
    }
}
