use yew::prelude::*;

use super::nav_link::NavLink;
use crate::model::Poi;

#[derive(Properties, PartialEq, Clone)]
pub struct PoiPanelProps {
    pub poi: Option<Poi>,
    pub on_open: Callback<String>,
    pub on_focus: Callback<()>,
}

/// Persistent side panel for the selected POI.
#[function_component]
pub fn PoiPanel(props: &PoiPanelProps) -> Html {
    let Some(poi) = &props.poi else {
        return html! {};
    };

    let panel_style = "position:absolute; right:12px; top:50%; transform:translateY(-50%); \
        background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; \
        padding:12px 16px; min-width:220px; max-width:260px; font-size:13px; color:#c9d1d9;";
    let header_style = "font-weight:600; font-size:15px; margin-bottom:4px; display:flex; align-items:center; gap:8px;";
    let section_style = "margin-top:10px; padding-top:8px; border-top:1px solid #30363d;";
    let row_style = "display:flex; justify-content:space-between; gap:8px; margin:4px 0; font-size:12px;";
    let label_style = "color:#8b949e;";
    let link_style = "color:#58a6ff; font-size:12px; text-decoration:none;";

    let open_cb = {
        let cb = props.on_open.clone();
        let id = poi.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let focus_cb = {
        let cb = props.on_focus.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = [
        ("Domain", poi.domain.as_str()),
        ("Location", poi.location.as_str()),
        ("Address", poi.address.as_str()),
    ];

    html! {
        <aside style={panel_style} data-no-drag="true" aria-label="Selected point of interest">
            <div style={header_style}>
                <span style={format!("width:8px; height:8px; border-radius:50%; background:{};", poi.kind.color())}></span>
                <span>{ poi.title.clone() }</span>
            </div>
            <div style="font-size:11px; color:#8b949e;">{ poi.kind.label() }</div>
            <div style={section_style}>
                { for rows.iter().filter(|(_, v)| !v.is_empty()).map(|(label, value)| html! {
                    <div style={row_style}>
                        <span style={label_style}>{ *label }</span>
                        <span style="text-align:right;">{ *value }</span>
                    </div>
                })}
            </div>
            { if poi.badges.is_empty() { html! {} } else { html! {
                <div style={format!("{section_style} display:flex; flex-wrap:wrap; gap:4px;")}>
                    { for poi.badges.iter().map(|b| html! {
                        <span style="font-size:10px; border:1px solid #30363d; border-radius:999px; padding:1px 6px;">{ b.clone() }</span>
                    })}
                </div>
            }}}
            <div style={format!("{section_style} display:flex; flex-direction:column; gap:6px;")}>
                <div style="display:flex; gap:6px;">
                    <button onclick={open_cb}>{"Details"}</button>
                    <button onclick={focus_cb}>{"Focus"}</button>
                </div>
                <NavLink href={poi.links.site.clone()} style={link_style}>{"Open site"}</NavLink>
                <NavLink href={poi.links.case.clone()} style={link_style}>{"View case study"}</NavLink>
            </div>
        </aside>
    }
}
