use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::video_grid::VideoGrid;
use crate::Route;

// Short-form teasers shown first; the home page marquee reuses both
// lists.
pub const TEASER_VIDEO_IDS: &[&str] = &[
    "QGsa5QB5gK4",
    "5fR4MErzYeI",
    "2qFnRXpSFn8",
    "7bZ5MKY6pfU",
    "QstSPHan4oE",
    "HMJyD-kPWek",
    "zd5De3LAMQc",
    "YM1TZnbcbOs",
    "pRya97qUJMs",
    "AqqGxOrwv_g",
];

pub const HIGHLIGHT_VIDEO_IDS: &[&str] = &[
    "2qFnRXpSFn8",
    "CevxZvSJLk8",
    "kffacxfA7G4",
    "qeMFqkcPYcg",
    "SQoA_wjmE9w",
    "ZbZSe6N_BXs",
    "HEXWRTEbj1I",
    "U9t-slLl69E",
    "iik25wqIuFo",
    "C0DPdy98e4c",
    "YQHsXMglC9A",
    "AdUw5RdyZxI",
    "hTWKbfoikeg",
    "NUYvbT6vTPs",
    "RgKAFK5djSk",
    "uelHwf8o7_U",
    "EhxJLojIE_o",
    "KQ6zr6kCPj8",
    "MtN1YnoL46Q",
    "sOnqjkJTMaA",
];

fn ids(list: &'static [&'static str]) -> Vec<AttrValue> {
    list.iter().map(|id| AttrValue::from(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_tables_convert_to_grid_props() {
        let teasers = ids(TEASER_VIDEO_IDS);
        assert_eq!(teasers.len(), TEASER_VIDEO_IDS.len());
        assert_eq!(teasers[0], AttrValue::from("QGsa5QB5gK4"));

        let highlights = ids(HIGHLIGHT_VIDEO_IDS);
        assert_eq!(highlights.len(), HIGHLIGHT_VIDEO_IDS.len());
        assert_eq!(
            highlights.last().cloned(),
            Some(AttrValue::from("sOnqjkJTMaA"))
        );
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <div class="page page-projects">
            <div class="page-header floating-panel-dark">
                <h1 class="page-heading">
                    {"The designs that turn vision into a bold reality"}
                </h1>
                <Link<Route> to={Route::Contact} classes="btn-pill btn-primary">
                    {"Get In Touch Today"}
                </Link<Route>>
            </div>

            <section class="section">
                <h2 class="section-heading">{"Teasers"}</h2>
                <VideoGrid video_ids={ids(TEASER_VIDEO_IDS)} grid_class={classes!("grid-cols-3")} />
            </section>

            <section class="section">
                <h2 class="section-heading">{"Highlights"}</h2>
                <VideoGrid video_ids={ids(HIGHLIGHT_VIDEO_IDS)} grid_class={classes!("grid-cols-4")} />
            </section>
        </div>
    }
}
