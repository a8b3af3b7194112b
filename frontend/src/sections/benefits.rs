use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{PageSection, FEATURES};

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section id={PageSection::Benefits.anchor()} class="benefits">
            <div class="benefits-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="card benefit-card">
                        <div class="benefit-icon">
                            <Icon kind={feature.icon} size={32} class={classes!("text-primary")} />
                        </div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .benefits {
                    padding: 6rem 1.5rem;
                }

                .benefits-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .benefit-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }

                .benefit-card:hover h3 {
                    color: var(--primary);
                }

                .benefit-card p {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .benefit-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    background: var(--background);
                    border: 1px solid var(--border-soft);
                }

                @media (min-width: 768px) {
                    .benefits-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .benefits-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
