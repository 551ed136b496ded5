use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::registry::{BlockRegistry, Components, ModifierRegistry};
use std::cell::RefCell;
use std::rc::Rc;

/// State shared by every node of one render pass: the effective registries
/// and the set of diagnostics already reported.
///
/// Cloning is cheap and clones share state. Two contexts are equal only when
/// they are clones of each other, which keeps memoised children from
/// re-rendering within a pass.
#[derive(Clone)]
pub struct RenderContext {
    inner: Rc<ContextInner>,
}

struct ContextInner {
    components: Components,
    sink: Option<DiagnosticSink>,
    emit: bool,
    reported: RefCell<Vec<Diagnostic>>,
}

impl RenderContext {
    pub fn new(components: Components) -> Self {
        Self::with_options(components, None, true)
    }

    /// `emit` switches off logging and the sink; repeats are still tracked
    pub fn with_options(
        components: Components,
        sink: Option<DiagnosticSink>,
        emit: bool,
    ) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                components,
                sink,
                emit,
                reported: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn components(&self) -> &Components {
        &self.inner.components
    }

    pub fn blocks(&self) -> &BlockRegistry {
        &self.inner.components.blocks
    }

    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.inner.components.modifiers
    }

    /// Record `diagnostic`, emitting it only the first time it is seen
    pub fn report(&self, diagnostic: Diagnostic) {
        {
            let mut reported = self.inner.reported.borrow_mut();
            if reported.contains(&diagnostic) {
                return;
            }
            reported.push(diagnostic.clone());
        }

        if !self.inner.emit {
            return;
        }
        log::warn!("{diagnostic}");
        if let Some(sink) = &self.inner.sink {
            sink.emit(&diagnostic);
        }
    }

    /// Distinct diagnostics reported so far, in first-seen order
    pub fn reported(&self) -> Vec<Diagnostic> {
        self.inner.reported.borrow().clone()
    }
}

impl PartialEq for RenderContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
