use yew::prelude::*;

use super::nav_link::NavLink;
use crate::model::District;

#[derive(Properties, PartialEq, Clone)]
pub struct MapHudProps {
    pub districts: Vec<District>,
    pub has_selection: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_focus_selected: Callback<()>,
    pub on_teleport: Callback<District>,
}

#[function_component(MapHud)]
pub fn map_hud(props: &MapHudProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let focus = {
        let cb = props.on_focus_selected.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let kbd = "display:inline-block; min-width:18px; text-align:center; border:1px solid #30363d; \
        border-radius:4px; padding:0 4px; font-size:11px; background:#0d1117;";
    let link_style = "font-size:11px; color:#58a6ff; text-decoration:none;";

    html! {<div data-no-drag="true" style="position:absolute; left:12px; right:12px; bottom:12px; display:flex; justify-content:space-between; align-items:flex-end; gap:12px; pointer-events:none;">
        <div style="pointer-events:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
            <span style={kbd}>{"W"}</span>
            <span style={kbd}>{"A"}</span>
            <span style={kbd}>{"S"}</span>
            <span style={kbd}>{"D"}</span>
            <span style="width:8px;"></span>
            <button onclick={zo} aria-label="Zoom out">{"-"}</button>
            <button onclick={zi} aria-label="Zoom in">{"+"}</button>
            <span style="width:8px;"></span>
            <button onclick={reset}>{"Reset view"}</button>
            <button onclick={focus} disabled={!props.has_selection}>{"Focus selected"}</button>
        </div>
        <div style="pointer-events:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:10px; flex-wrap:wrap;">
            { for props.districts.iter().map(|d| {
                let teleport = {
                    let cb = props.on_teleport.clone();
                    let d = d.clone();
                    Callback::from(move |_| cb.emit(d.clone()))
                };
                html! {
                    <div key={d.id.clone()} style="display:flex; flex-direction:column; align-items:flex-start; gap:2px;">
                        <button onclick={teleport} aria-label={format!("Teleport to {}", d.label)}>{ d.label.clone() }</button>
                        <NavLink href={d.page_href.clone()} style={link_style}>{"Open district page"}</NavLink>
                    </div>
                }
            })}
        </div>
    </div>}
}
