#![allow(dead_code)]

use blocks_renderer_dioxus::{BlocksRenderer, BlocksRendererProps, Diagnostic, DiagnosticSink};
use blocks_renderer_engine::Document;
use dioxus::dioxus_core::VirtualDom;
use std::cell::RefCell;
use std::rc::Rc;

pub fn document(json: &str) -> Document {
    Document::from_json(json).unwrap()
}

pub fn render(props: BlocksRendererProps) -> String {
    let mut dom = VirtualDom::new_with_props(BlocksRenderer, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_json(json: &str) -> String {
    render(BlocksRendererProps::new(document(json)))
}

/// A sink that records every diagnostic it receives
pub fn recording_sink() -> (DiagnosticSink, Rc<RefCell<Vec<Diagnostic>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let seen = seen.clone();
        DiagnosticSink::new(move |diagnostic| seen.borrow_mut().push(diagnostic.clone()))
    };
    (sink, seen)
}

/// Byte offset of `needle` in `html`, failing the test when absent
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {html}"))
}
