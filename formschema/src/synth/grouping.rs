//! Horizontal grouping of one sibling list.
//!
//! Unnamed horizontal fields merge with their directly adjacent unnamed
//! horizontal siblings. Named horizontal fields merge with every sibling of
//! the same name and the whole unit is emitted where the first member stood.
//! A unit of one member is emitted bare; larger units are wrapped in a
//! `HorizontalLayout`.

use indexmap::IndexMap;
use tracing::trace;

use super::{Draft, LayoutHint};
use crate::uischema::{Layout, UiNode};

/// Group a sibling list. Layout hints are consumed; other hints are dropped.
pub(crate) fn group(drafts: Vec<Draft>) -> Vec<UiNode> {
    let mut named: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (index, draft) in drafts.iter().enumerate() {
        if let Some(LayoutHint::Named(name)) = &draft.hints.layout {
            named.entry(name.clone()).or_default().push(index);
        }
    }

    let mut slots: Vec<Option<Draft>> = drafts.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    let mut pending: Vec<UiNode> = Vec::new();

    for index in 0..slots.len() {
        // Empty slots were named members already emitted with their bucket.
        let Some(draft) = slots[index].take() else {
            flush(&mut pending, &mut out);
            continue;
        };

        match draft.hints.layout {
            Some(LayoutHint::Named(name)) => {
                flush(&mut pending, &mut out);

                let mut members = vec![draft.node];
                if let Some(indices) = named.get(&name) {
                    members.extend(
                        indices
                            .iter()
                            .filter(|&&i| i != index)
                            .filter_map(|&i| slots[i].take())
                            .map(|d| d.node),
                    );
                }

                trace!(group = %name, members = members.len(), "emitting named horizontal group");
                emit(members, &mut out);
            }
            Some(LayoutHint::Adjacent) => pending.push(draft.node),
            None => {
                flush(&mut pending, &mut out);
                out.push(draft.node);
            }
        }
    }

    flush(&mut pending, &mut out);
    out
}

fn flush(pending: &mut Vec<UiNode>, out: &mut Vec<UiNode>) {
    if !pending.is_empty() {
        emit(std::mem::take(pending), out);
    }
}

fn emit(mut members: Vec<UiNode>, out: &mut Vec<UiNode>) {
    match members.len() {
        0 => {}
        1 => out.extend(members.pop()),
        n => {
            trace!(members = n, "wrapping horizontal unit");
            out.push(Layout::horizontal(members).into());
        }
    }
}
