use super::blueprint_map::BlueprintMap;
use crate::model::BlueprintData;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let data = use_memo((), |_| match BlueprintData::bundled() {
        Ok(data) => {
            log::info!(
                "blueprint loaded: {} points of interest, {} districts",
                data.pois.len(),
                data.districts.len()
            );
            data
        }
        Err(err) => {
            log::error!("bundled blueprint rejected: {err}");
            BlueprintData::default()
        }
    });

    html! {
        <div style="position:fixed; inset:0; background:#0d1117; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <BlueprintMap data={data} />
        </div>
    }
}
