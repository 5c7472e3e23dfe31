use yew::prelude::*;

use crate::model::LinkTarget;

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor that opens external sites in a new tab and keeps site routes in place.
#[function_component]
pub fn NavLink(props: &NavLinkProps) -> Html {
    match LinkTarget::classify(&props.href) {
        LinkTarget::External => html! {
            <a href={props.href.clone()} style={props.style.clone()} target="_blank" rel="noopener noreferrer">
                { props.children.clone() }
            </a>
        },
        LinkTarget::Internal => html! {
            <a href={props.href.clone()} style={props.style.clone()}>{ props.children.clone() }</a>
        },
    }
}
