use serde::{Deserialize, Serialize};

/// A single entry a witness template asks the spender to supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WitnessItem {
    /// The integer that selects this branch among its siblings.
    Selector(i64),
    /// The name of an unbound variable; its value must be supplied at
    /// spend time.
    Name(String),
}

/// The per-branch description of what a spender must place on the stack to
/// satisfy one DNF conjunction, plus an optional human-facing nickname.
///
/// `items` is assembled leaf by leaf: each leaf contributes a small ordered
/// fragment (its own witness entries in discovery order), and fragments are
/// prepended as whole blocks while a conjunction's leaves are processed
/// left to right — so a conjunction's rightmost leaf's entries come first
/// in the final sequence. See `DESIGN.md` for why this crate resolves the
/// ordering this way rather than a single global prepend per item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessTemplate {
    pub items: Vec<WitnessItem>,
    pub nickname: Option<Vec<u8>>,
}

impl WitnessTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_front(&mut self, item: WitnessItem) {
        self.items.insert(0, item);
    }

    /// Prepend a whole fragment of items as a contiguous block, preserving
    /// the fragment's own internal order. Used to merge a leaf's discovered
    /// witness items into a branch's accumulated list: leaves processed
    /// later in a conjunction end up earlier in the final sequence, while
    /// each leaf's own items keep the order they were discovered in.
    pub(crate) fn prepend_fragment(&mut self, fragment: Vec<WitnessItem>) {
        if fragment.is_empty() {
            return;
        }
        let mut merged = fragment;
        merged.append(&mut self.items);
        self.items = merged;
    }

    pub(crate) fn set_nickname(&mut self, nickname: Vec<u8>) {
        self.nickname = Some(nickname);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_prepends_a_single_item() {
        let mut t = WitnessTemplate::new();
        t.push_front(WitnessItem::Name("a".into()));
        t.push_front(WitnessItem::Selector(1));
        assert_eq!(t.items, vec![WitnessItem::Selector(1), WitnessItem::Name("a".into())]);
    }

    #[test]
    fn prepend_fragment_keeps_internal_order_but_leads() {
        let mut t = WitnessTemplate::new();
        t.prepend_fragment(vec![WitnessItem::Name("sig".into()), WitnessItem::Name("key".into())]);
        t.prepend_fragment(vec![WitnessItem::Selector(1)]);
        assert_eq!(
            t.items,
            vec![
                WitnessItem::Selector(1),
                WitnessItem::Name("sig".into()),
                WitnessItem::Name("key".into()),
            ]
        );
    }

    #[test]
    fn serializes_to_json_for_external_spend_tooling() {
        let mut t = WitnessTemplate::new();
        t.prepend_fragment(vec![WitnessItem::Name("sig".into())]);
        t.push_front(WitnessItem::Selector(1));
        t.set_nickname(vec![0xde, 0xad]);

        let json = serde_json::to_string(&t).unwrap();
        let round_tripped: WitnessTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(t, round_tripped);
    }
}
