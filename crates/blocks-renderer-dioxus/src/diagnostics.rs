use std::fmt;
use std::rc::Rc;

/// Content that could not be rendered. Rendering carries on regardless; the
/// offending node simply produces no output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    MissingBlock { kind: String },
    MissingModifier { name: String },
    MalformedNode { kind: String, reason: String },
    MisplacedNode { parent: String, kind: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingBlock { kind } => {
                write!(f, "No component found for block type \"{kind}\"")
            }
            Diagnostic::MissingModifier { name } => {
                write!(f, "No component found for modifier \"{name}\"")
            }
            Diagnostic::MalformedNode { kind, reason } => {
                write!(f, "Skipped malformed \"{kind}\" node: {reason}")
            }
            Diagnostic::MisplacedNode { parent, kind } => {
                write!(f, "Skipped \"{kind}\" node inside \"{parent}\"")
            }
        }
    }
}

/// Caller callback receiving each diagnostic the first time it occurs in a pass
#[derive(Clone)]
pub struct DiagnosticSink(Rc<dyn Fn(&Diagnostic)>);

impl DiagnosticSink {
    pub fn new(callback: impl Fn(&Diagnostic) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn emit(&self, diagnostic: &Diagnostic) {
        (self.0)(diagnostic)
    }
}

impl PartialEq for DiagnosticSink {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiagnosticSink")
    }
}
