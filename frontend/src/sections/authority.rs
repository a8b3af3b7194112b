use yew::prelude::*;

use crate::content::{LogoMark, AUTHORITY_LOGOS};

#[function_component(Authority)]
pub fn authority() -> Html {
    html! {
        <section class="authority">
            <div class="authority-content">
                <div class="authority-intro">
                    <span class="badge badge-caps">{"Tecnologia Classe Mundial"}</span>
                    <h3>{"Aqui é jogo grande."}</h3>
                    <p>
                        {"A tecnologia por trás da nossa plataforma já recebeu mais de US$ 300 milhões em investimentos e é utilizada por empresas líderes no mundo inteiro."}
                    </p>
                </div>

                <div class="logo-wall">
                    { for AUTHORITY_LOGOS.iter().map(|LogoMark { view_box, path }| html! {
                        <svg class="logo-wall-mark" viewBox={*view_box} fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d={*path} fill="currentColor" />
                        </svg>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .authority {
                    padding: 4rem 1.5rem;
                    border-top: 1px solid var(--border-soft);
                    border-bottom: 1px solid var(--border-soft);
                    background: color-mix(in srgb, var(--surface) 30%, transparent);
                }

                .authority-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .authority-intro {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }

                .authority-intro h3 {
                    font-size: 2rem;
                    margin: 0;
                }

                .authority-intro p {
                    color: var(--text-muted);
                    max-width: 42rem;
                    font-size: 1.125rem;
                }

                .logo-wall {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 3rem;
                    opacity: 0.4;
                    filter: grayscale(1);
                    transition: all 0.7s;
                }

                .logo-wall:hover {
                    opacity: 1;
                    filter: none;
                }

                .logo-wall-mark {
                    height: 2rem;
                    color: var(--text-main);
                }
                "#}
            </style>
        </section>
    }
}
