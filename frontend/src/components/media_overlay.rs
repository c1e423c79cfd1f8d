use yew::prelude::*;

use crate::media::{OverlayClick, VideoAd};

#[derive(Properties, PartialEq)]
pub struct MediaOverlayProps {
    pub video: Option<&'static VideoAd>,
    pub on_click: Callback<OverlayClick>,
}

/// Full-screen player for the selected video ad.
///
/// Clicks on the player are contained so only the backdrop and the close
/// button reach the dismiss handler.
#[function_component(MediaOverlay)]
pub fn media_overlay(props: &MediaOverlayProps) -> Html {
    let on_backdrop = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(OverlayClick::Backdrop))
    };
    let on_surface = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(OverlayClick::MediaSurface);
        })
    };
    let on_close = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(OverlayClick::CloseButton);
        })
    };

    html! {
        <>
            {
                if let Some(video) = props.video {
                    html! {
                        <div class="media-overlay" onclick={on_backdrop}>
                            <figure class="media-player" onclick={on_surface}>
                                <div class="media-player-bar">
                                    <button class="media-player-close" onclick={on_close}>{"Close"}</button>
                                </div>
                                <video
                                    key={video.id.to_string()}
                                    src={video.src}
                                    controls=true
                                    autoplay=true
                                    loop=false
                                    muted=false
                                ></video>
                            </figure>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .media-overlay {
                    position: fixed;
                    inset: 0;
                    display: grid;
                    place-items: center;
                    background: #030712e6;
                    z-index: 50;
                }
                .media-player {
                    margin: 0;
                    width: min(960px, 94vw);
                }
                .media-player-bar {
                    display: flex;
                    justify-content: flex-end;
                    padding-bottom: 0.5rem;
                }
                .media-player-close {
                    background: none;
                    border: none;
                    color: #a5b4fc;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .media-player video {
                    width: 100%;
                    max-height: 80vh;
                    background: #000;
                }
                "#}
            </style>
        </>
    }
}
