use log::warn;
use yew::prelude::*;

use crate::components::media_overlay::MediaOverlay;
use crate::components::registration_form::RegistrationForm;
use crate::config;
use crate::media::{MediaViewer, OverlayClick, POSTERS, VIDEO_ADS};

fn render_offer() -> Html {
    html! {
        <div class="offer-card">
            <h1>{"Our Offer Price:"}</h1>
            {
                config::OFFER_ITEMS.iter().map(|item| html! {
                    <p class="offer-item">{*item}</p>
                }).collect::<Html>()
            }
            <p class="offer-price">{format!("Just: {}", config::OFFER_PRICE)}</p>
            <p class="offer-contact">{format!("Contact: {}", config::CONTACT_NUMBER)}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let viewer = use_state(MediaViewer::default);

    let on_select_video = {
        let viewer = viewer.clone();
        Callback::from(move |id: u32| {
            let mut next = *viewer;
            match next.select(id) {
                Ok(_) => viewer.set(next),
                Err(e) => warn!("{}", e),
            }
        })
    };

    let on_overlay_click = {
        let viewer = viewer.clone();
        Callback::from(move |origin: OverlayClick| {
            let mut next = *viewer;
            next.handle_click(origin);
            viewer.set(next);
        })
    };

    let landing_css = r#"
        .landing-page {
            min-height: 100vh;
            background: #111827;
            color: #f3f4f6;
        }
        .landing-nav {
            background: #1f2937;
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3);
            padding: 1rem;
            display: flex;
            justify-content: center;
            align-items: center;
        }
        .landing-brand {
            font-size: 1.5rem;
            font-weight: 700;
            color: #6366f1;
        }
        .landing-main {
            padding: 1.5rem;
            display: flex;
            flex-direction: column;
            gap: 3rem;
        }
        .landing-main h2 {
            font-size: 1.5rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }
        .media-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
        .media-card {
            background: #1f2937;
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3);
            transition: transform 0.3s ease;
            cursor: pointer;
        }
        .media-card:hover {
            transform: scale(1.05);
        }
        .media-card video, .media-card img {
            width: 100%;
            height: 12rem;
            object-fit: cover;
            display: block;
        }
        .offer-card {
            margin: 1.5rem auto 0;
            background: white;
            padding: 1rem;
            border-radius: 12px;
            border: 2px solid #4f46e5;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
            text-align: center;
            max-width: 24rem;
        }
        .offer-card h1 {
            font-weight: 700;
            font-size: 1.5rem;
            color: #4338ca;
            margin-bottom: 1rem;
        }
        .offer-item, .offer-contact {
            color: #111827;
        }
        .offer-price {
            margin-top: 1rem;
            font-weight: 700;
            font-size: 1.5rem;
            color: #dc2626;
            animation: offer-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
        }
        .offer-contact {
            margin-top: 0.5rem;
        }
        @keyframes offer-pulse {
            50% { opacity: 0.5; }
        }
        @media (max-width: 768px) {
            .media-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }
        @media (max-width: 640px) {
            .media-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <nav class="landing-nav">
                <div class="landing-brand">{config::BRAND_NAME}</div>
            </nav>

            <main class="landing-main">
                <section>
                    <h2>{"Our ACA Video Ads"}</h2>
                    <div class="media-grid">
                        {
                            VIDEO_ADS.iter().map(|video| {
                                let onclick = {
                                    let on_select_video = on_select_video.clone();
                                    let id = video.id;
                                    Callback::from(move |_: MouseEvent| on_select_video.emit(id))
                                };
                                html! {
                                    <div key={video.id.to_string()} class="media-card" {onclick}>
                                        <video src={video.src} autoplay=true loop=true muted=true></video>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section>
                    <h2>{"Our Posters"}</h2>
                    <div class="media-grid">
                        {
                            POSTERS.iter().map(|poster| html! {
                                <div key={poster.id.to_string()} class="media-card">
                                    <img
                                        src={poster.image}
                                        alt=""
                                        oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}
                                    />
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <div>
                    <RegistrationForm endpoint={config::get_registration_url()} />
                    {render_offer()}
                </div>
            </main>

            <MediaOverlay video={viewer.selected()} on_click={on_overlay_click} />
        </div>
    }
}
