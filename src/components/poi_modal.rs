use yew::prelude::*;

use super::nav_link::NavLink;
use crate::model::Poi;

#[derive(Properties, PartialEq, Clone)]
pub struct PoiModalProps {
    pub poi: Option<Poi>,
    pub close_ref: NodeRef,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PoiModal(props: &PoiModalProps) -> Html {
    let Some(poi) = &props.poi else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title_id = format!("poi-title-{}", poi.id);
    let desc_id = format!("poi-desc-{}", poi.id);
    let action_style = "padding:6px 12px; border:1px solid #30363d; border-radius:6px; color:#c9d1d9; \
        background:#21262d; text-decoration:none; font-size:13px;";

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; z-index:50;"
            role="dialog" aria-modal="true" aria-labelledby={title_id.clone()} aria-describedby={desc_id.clone()} data-no-drag="true">
        <button type="button" onclick={close_cb.clone()} aria-label="Close"
            style="position:absolute; inset:0; background:rgba(0,0,0,0.55); border:none; cursor:default;"></button>
        <div style="position:relative; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:460px; display:flex; flex-direction:column; gap:12px; color:#c9d1d9;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <div style="display:flex; align-items:center; gap:10px;">
                    { if let Some(logo) = &poi.logo { html! {
                        <img src={logo.clone()} alt="" width="32" height="32" style="border-radius:6px;" />
                    }} else { html! {} }}
                    <h2 id={title_id} style="margin:0; font-size:18px;">{ poi.title.clone() }</h2>
                </div>
                <button ref={props.close_ref.clone()} type="button" onclick={close_cb} aria-label="Close" style="padding:4px 8px;">{"×"}</button>
            </div>
            <p id={desc_id} style="margin:0; line-height:1.5;">{ poi.tagline.clone() }</p>
            { if poi.location.is_empty() { html! {} } else { html! {
                <div style="font-size:12px; opacity:0.7;">{ poi.location.clone() }</div>
            }}}
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <NavLink href={poi.links.site.clone()} style={action_style}>{"Open site"}</NavLink>
                <NavLink href={poi.links.case.clone()} style={action_style}>{"View case"}</NavLink>
            </div>
        </div>
    </div>}
}
