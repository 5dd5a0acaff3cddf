use yew::prelude::*;

/// Embed URL for a YouTube video id, muted and without autoplay so a
/// grid of players does not start blaring on page load.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{video_id}?autoplay=0&mute=1&controls=1&modestbranding=1&rel=0&showinfo=0"
    )
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video_id: AttrValue,
    pub index: usize,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    html! {
        <div class="video-container">
            <iframe
                class="video-frame"
                src={embed_url(&props.video_id)}
                title={format!("Portfolio video {}", props.index + 1)}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
                loading="lazy"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub video_ids: Vec<AttrValue>,
    /// Extra class controlling the column count, e.g. "grid-cols-4".
    #[prop_or_default]
    pub grid_class: Classes,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class={classes!("video-grid", props.grid_class.clone())}>
            {
                props.video_ids.iter().enumerate().map(|(index, video_id)| html! {
                    <VideoCard key={index} video_id={video_id.clone()} {index} />
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_contains_video_id_and_stays_muted() {
        let url = embed_url("QGsa5QB5gK4");
        assert!(url.starts_with("https://www.youtube.com/embed/QGsa5QB5gK4?"));
        assert!(url.contains("autoplay=0"));
        assert!(url.contains("mute=1"));
    }
}
