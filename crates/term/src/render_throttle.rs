/// Skips redraws of frames that would look the same as the last one.
///
/// A puzzle frame only changes on input, so the main loop asks this before
/// building a framebuffer. A keep-alive redraw still happens every
/// `keepalive_ms` so a terminal that dropped output recovers.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    keepalive_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(keepalive_ms: u64) -> Self {
        Self {
            keepalive_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a frame whose content hashes to `fingerprint`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if self.last_fingerprint != Some(fingerprint) {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.keepalive_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Make the next `should_render` call return true (terminal resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_and_changes_render() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(16, 7));
        assert!(t.should_render(32, 8));
    }

    #[test]
    fn invalidate_forces_redraw() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7));
        t.invalidate();
        assert!(t.should_render(16, 7));
    }
}
