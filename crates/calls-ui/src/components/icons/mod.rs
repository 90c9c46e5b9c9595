//! SVG icon components and the attribute plumbing they share.
//!
//! # Design
//! - Icons are pure: props in, one `<svg>` out, no hooks.
//! - Caller attributes land on the root element; fixed geometry always wins.

use yew::prelude::*;

mod unraised_hand;

pub use unraised_hand::{
    UNRAISED_HAND_PATH, UNRAISED_HAND_VIEW_BOX, UnraisedHandIcon, UnraisedHandIconProps,
};

/// Root attributes fixed by the icon; pass-through entries never replace them.
const FIXED_ATTRS: &[&str] = &["viewBox", "role"];

fn icon_title(title: Option<&AttrValue>) -> Html {
    title
        .map(|text| html! { <title>{text.clone()}</title> })
        .unwrap_or_default()
}

/// Copies extra caller attributes onto the root `<svg>` of a rendered icon.
///
/// `typed` names the attributes the icon already set from its typed props;
/// an entry for one of those is skipped so the typed value stands.
fn forward_attrs(
    mut node: Html,
    attrs: &[(&'static str, AttrValue)],
    typed: &[&str],
) -> Html {
    if let Html::VTag(tag) = &mut node {
        for (key, value) in attrs {
            if !FIXED_ATTRS.contains(key) && !typed.contains(key) {
                tag.add_attribute(*key, value.clone());
            }
        }
    }
    node
}
