use yew::prelude::*;

use crate::components::common::Button;
use crate::content::BRAND;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <div class="cta-content">
                <h2>
                    {"Vendas sem organização são sorte."}
                    <br />
                    {"Vendas com "}<span class="text-primary">{BRAND}</span>{" são estratégia."}
                </h2>
                <Button class={classes!("btn-hero")}>{"Começar Minha Estratégia Agora"}</Button>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1.5rem;
                    text-align: center;
                    background: linear-gradient(to top, color-mix(in srgb, var(--primary) 10%, transparent), transparent);
                }

                .cta-content {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .cta h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    line-height: 1.2;
                    margin: 0 0 2rem;
                }

                .btn-hero {
                    height: 4rem;
                    padding: 0 2.5rem;
                    font-size: 1.125rem;
                    box-shadow: 0 0 40px rgba(0, 191, 255, 0.4);
                }
                "#}
            </style>
        </section>
    }
}
