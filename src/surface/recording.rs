use std::collections::BTreeSet;

use egui::Pos2;

use super::{Handle, RenderSurface};
use crate::style::Style;
use crate::tools::ShapeKind;

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    DrawShape {
        kind: ShapeKind,
        from: Pos2,
        to: Pos2,
        style: Style,
        handle: Handle,
    },
    DrawSegment {
        from: Pos2,
        to: Pos2,
        style: Style,
        handle: Handle,
    },
    Erase(Handle),
}

/// Headless surface that paints nothing and remembers everything it was
/// asked to do.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    live: BTreeSet<Handle>,
    next_id: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the call log, keeping the set of live handles
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.live.contains(&handle)
    }

    pub fn live_handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.live.iter().copied()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Handles passed to `erase`, in call order
    pub fn erased(&self) -> Vec<Handle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Erase(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }

    /// Endpoints of every `draw_segment` call, in call order
    pub fn segments(&self) -> Vec<(Pos2, Pos2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::DrawSegment { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn issue(&mut self) -> Handle {
        self.next_id += 1;
        let handle = Handle::from_raw(self.next_id);
        self.live.insert(handle);
        handle
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_shape(&mut self, kind: ShapeKind, from: Pos2, to: Pos2, style: &Style) -> Handle {
        let handle = self.issue();
        self.calls.push(SurfaceCall::DrawShape {
            kind,
            from,
            to,
            style: *style,
            handle,
        });
        handle
    }

    fn draw_segment(&mut self, from: Pos2, to: Pos2, style: &Style) -> Handle {
        let handle = self.issue();
        self.calls.push(SurfaceCall::DrawSegment {
            from,
            to,
            style: *style,
            handle,
        });
        handle
    }

    fn erase(&mut self, handle: Handle) {
        self.live.remove(&handle);
        self.calls.push(SurfaceCall::Erase(handle));
    }
}
