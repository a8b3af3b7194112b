use yew::prelude::*;

use crate::content::DEMO_IMAGE;

#[function_component(VisualDemo)]
pub fn visual_demo() -> Html {
    html! {
        <section class="visual-demo">
            <div class="visual-demo-content">
                <div class="demo-frame">
                    <div class="demo-sheen"></div>
                    <img src={DEMO_IMAGE} alt="Dashboard Interface Mockup" />
                </div>
                <p>{"Tudo projetado para você vender mais com menos esforço."}</p>
            </div>

            <style>
                {r#"
                .visual-demo {
                    padding: 4rem 1.5rem;
                }

                .visual-demo-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .visual-demo-content p {
                    margin-top: 2rem;
                    color: var(--text-muted);
                    font-size: 1.125rem;
                    font-weight: 500;
                }

                .demo-frame {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    overflow: hidden;
                }

                .demo-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }

                .demo-sheen {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, color-mix(in srgb, var(--primary) 10%, transparent), transparent);
                    opacity: 0;
                    transition: opacity 0.5s;
                    pointer-events: none;
                }

                .demo-frame:hover .demo-sheen {
                    opacity: 1;
                }
                "#}
            </style>
        </section>
    }
}
